// Fixed strings shown by the demo controller and the web page.

pub const MODEL_STATUS_INITIAL: &str = "尚未加载";

pub const MODEL_STATUS_READY: &str = "模型状态：ColBERT v2.0 已就绪（演示模式，未加载真实权重）";

pub const EMPTY_QUERY_PROMPT: &str = "请输入查询文本以进行检索。";

pub const RETRIEVE_DISCLAIMER: &str = "[演示] 已对查询进行 ColBERT 晚期交互检索（未加载真实模型）。";

/// Placeholder hits, one line each, in rank order.
pub const PLACEHOLDER_HITS: [&str; 3] = [
    "1. [pid=1] 得分 0.92 — 示例段落 A（MaxSim 匹配）",
    "2. [pid=2] 得分 0.88 — 示例段落 B（上下文晚期交互）",
    "3. [pid=3] 得分 0.85 — 示例段落 C",
];

pub const RETRIEVE_CLOSING: &str =
    "说明：加载真实 ColBERT v2.0 模型并构建索引后，将在此显示真实检索段落与得分。";

pub const INDEX_STATUS: &str = concat!(
    "[演示] 索引状态：未构建。\n",
    "真实使用时需先对语料进行 ColBERT 编码并建索引（nbits=2 等），",
    "再进行检索与可视化。",
);
