pub mod dashscope_client;

pub use dashscope_client::DashScopeClient;
