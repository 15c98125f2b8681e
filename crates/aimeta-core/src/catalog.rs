//! 指示符目录（Catalog）
//!
//! - 内置列表为进程级常量，顺序即报告顺序。
//! - 指示符是字节序列而非字符串：逐字节、区分大小写比较，不做任何编码归一化。
//! - 允许在进程启动时通过规则文件追加条目（见 rules.rs），构建完成后只读。
use std::borrow::Cow;

/// 内置的 AI 生成 / 内容溯源元数据指示符
pub const BUILTIN_INDICATORS: &[&[u8]] = &[
    // C2PA / JUMBF 标记
    b"c2pa",
    b"claim_generator",
    b"claim_generator_info",
    b"created_software_agent",
    b"actions.v2",
    b"assertions",
    b"urn:c2pa",
    b"jumd",
    b"jumb",
    b"jumdcbor",
    b"jumdc2ma",
    b"jumdc2as",
    b"jumdc2cl",
    b"cbor",
    b"convertedsfwareagent",
    b"c2pa.version",
    b"c2pa.assertions",
    b"c2pa.actions",
    b"c2pa.thumbnail",
    b"c2pa.signature",
    b"c2pa.manifest",
    b"c2pa.manifest_store",
    b"c2pa.ingredient",
    b"c2pa.parent",
    b"c2pa.provenance",
    b"c2pa.claim",
    b"c2pa.hash",
    b"c2pa.authority",
    b"jumdc2pn",
    b"jumdrefs",
    b"jumdver",
    b"jumdmeta",
    // 生成工具
    b"midjourney",
    b"stable-diffusion",
    b"stable diffusion",
    b"stable_diffusion",
    b"artbreeder",
    b"runwayml",
    b"remix.ai",
    b"firefly",
    b"adobe_firefly",
    // OpenAI / DALL·E
    b"openai",
    b"dalle",
    b"dalle2",
    b"DALL-E",
    "DALL·E".as_bytes(),
    b"created_by: openai",
    b"tool: dalle",
    b"tool: dalle2",
    b"creator: openai",
    b"creator: dalle",
    b"openai.com",
    b"api.openai.com",
    b"openai_model",
    b"openai_gpt",
    // 其他通用的生成痕迹
    b"generated_by",
    b"model_id",
    b"model_version",
    b"model_info",
    b"tool_name",
    b"tool_creator",
    b"tool_version",
    b"model_signature",
    b"ai_model",
    b"ai_tool",
    b"generator",
    b"generated_by_ai",
    b"ai_generated",
    b"ai_art",
];

/// 单个指示符（按字节内容判定同一性）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Indicator(Cow<'static, [u8]>);

impl Indicator {
    /// 引用静态字节序列，不拷贝
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Self(Cow::Borrowed(bytes))
    }

    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self(Cow::Owned(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// 用于展示的文本：有损 UTF-8 解码，非法序列替换为 U+FFFD，永不失败
    pub fn display_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

/// 有序、只读的指示符目录
#[derive(Debug, Clone)]
pub struct Catalog {
    indicators: Vec<Indicator>,
}

impl Catalog {
    /// 内置目录（与 BUILTIN_INDICATORS 顺序一致）
    pub fn builtin() -> Self {
        Self::from_indicators(BUILTIN_INDICATORS.iter().map(|&b| Indicator::from_static(b)))
    }

    /// 由任意指示符序列构建；保持插入顺序，重复条目保留（无害）
    pub fn from_indicators<I: IntoIterator<Item = Indicator>>(iter: I) -> Self {
        Self { indicators: iter.into_iter().collect() }
    }

    /// 追加额外条目：已存在的字节序列跳过，返回实际新增数量
    pub fn extend_unique<I: IntoIterator<Item = Indicator>>(mut self, extra: I) -> (Self, usize) {
        let mut added = 0;
        for ind in extra {
            if self.indicators.iter().any(|e| e == &ind) { continue; }
            self.indicators.push(ind);
            added += 1;
        }
        (self, added)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Indicator> {
        self.indicators.iter()
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Indicator;
    type IntoIter = std::slice::Iter<'a, Indicator>;

    fn into_iter(self) -> Self::IntoIter {
        self.indicators.iter()
    }
}
