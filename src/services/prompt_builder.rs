//! Fixed style-to-template mapping and prompt construction.
//!
//! Each style owns one instruction template with a single `{主题}`
//! placeholder that is filled with the caller's topic.

/// Placeholder token replaced by the topic at build time.
pub const TOPIC_PLACEHOLDER: &str = "{主题}";

const XIAOHONGSHU_TEMPLATE: &str = r#"
你是一个小红书爆款标题生成器，请根据主题“{主题}”，生成5个吸引眼球、带emoji、口语化、有悬念或情绪共鸣的标题。

要求：
- 每个标题不超过20字
- 必须带1-2个emoji
- 用“我”、“你”、“谁懂啊”、“救命”、“真的绝了”等口语词
- 风格：活泼、种草、情绪共鸣

示例：
🔥谁懂啊！健身3个月，腰围狂减8cm！
💥打工人必看！5分钟搞定周报，老板狂夸！
✨素人改造｜换发型=换头！闺蜜追着问链接！

请直接输出标题，不要解释，不要序号，每行一个。
⚠️ 注意：不要解释词语含义！不要写“示例”！直接生成标题！
"#;

const ZHIHU_TEMPLATE: &str = r#"
你是一个知乎高赞标题生成器，请根据主题“{主题}”，生成5个理性、有深度、带方法论或数据支撑的标题。

要求：
- 每个标题不超过25字
- 用“为什么”、“如何”、“有哪些”、“深度解析”等词
- 风格：专业、冷静、有信息增量

示例：
为什么90%的人健身3个月就放弃？科学解析+解决方案
如何用「番茄工作法」提升300%效率？亲测有效
有哪些不为人知的租房避坑指南？律师朋友告诉我这些

请直接输出标题，不要解释，不要序号，每行一个。
⚠️ 注意：不要解释词语含义！不要写“示例”！直接生成标题！
"#;

const DOUYIN_TEMPLATE: &str = r#"
你是一个抖音爆款标题生成器，请根据主题“{主题}”，生成5个前3秒就能抓住眼球的标题。

要求：
- 每个标题不超过15字
- 开头必须有强钩子：“注意！”、“速看！”、“别划走！”、“最后1秒惊呆！”
- 用感叹号、问号、省略号制造悬念
- 风格：快节奏、强冲击、反转结局

示例：
注意！这样睡觉=慢性自杀！
速看！月薪3千到3万，我只做了这件事...
别划走！99%人不知道的微信隐藏功能！

请直接输出标题，不要解释，不要序号，每行一个。
⚠️ 注意：不要解释词语含义！不要写“示例”！直接生成标题！
"#;

const ROAST_TEMPLATE: &str = r#"
你是一个毒舌段子手，请根据主题“{主题}”，生成5个带反转、情绪、吐槽的标题。

要求：
- 每个标题不超过20字
- 用“笑死”、“谁懂”、“离谱”、“求你们别...”、“我又...”等情绪词
- 带反转 or 自嘲 or 夸张
- 风格：犀利、幽默、有网感

示例：
笑死！谁家好人上班带饭啊？
谁懂啊！男朋友说“多喝热水”那一刻我裂开了
求你们别再买网红小家电了！智商税第一名！

请直接输出标题，不要解释，不要序号，每行一个。
⚠️ 注意：不要解释词语含义！不要写“示例”！直接生成标题！
"#;

/// Closed set of supported title styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleStyle {
    #[default]
    Xiaohongshu,
    Zhihu,
    Douyin,
    Roast,
}

impl TitleStyle {
    pub const ALL: [TitleStyle; 4] = [
        TitleStyle::Xiaohongshu,
        TitleStyle::Zhihu,
        TitleStyle::Douyin,
        TitleStyle::Roast,
    ];

    /// Total over all inputs: unknown labels fall back to the default style.
    pub fn from_key(key: &str) -> Self {
        match key {
            "爆款小红书" => TitleStyle::Xiaohongshu,
            "知乎专业风" => TitleStyle::Zhihu,
            "抖音短平快" => TitleStyle::Douyin,
            "毒舌吐槽风" => TitleStyle::Roast,
            _ => TitleStyle::default(),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TitleStyle::Xiaohongshu => "爆款小红书",
            TitleStyle::Zhihu => "知乎专业风",
            TitleStyle::Douyin => "抖音短平快",
            TitleStyle::Roast => "毒舌吐槽风",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            TitleStyle::Xiaohongshu => XIAOHONGSHU_TEMPLATE,
            TitleStyle::Zhihu => ZHIHU_TEMPLATE,
            TitleStyle::Douyin => DOUYIN_TEMPLATE,
            TitleStyle::Roast => ROAST_TEMPLATE,
        }
    }
}

/// Substitute the topic into the style's template.
///
/// Callers validate the topic first; this assumes a non-empty trimmed topic.
pub fn build_prompt(topic: &str, style: TitleStyle) -> String {
    style.template().replacen(TOPIC_PLACEHOLDER, topic.trim(), 1)
}
