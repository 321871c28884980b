//! Fixed user-facing texts.
//!
//! Every failure kind has its own message per operation so the learner can
//! tell a missing key from an unreachable service or an unusable quiz.

use super::error::{MalformedKind, ServiceError};
use super::service::Operation;

pub const WELCOME: &str = "欢迎来到化学键实验室！请点击左侧分子模型中的化学键（如双键、单键）或原子，AI 将为您解析其性质。";

pub const ANALYZING_BOND: &str = "正在分析化学键性质...";
pub const ANALYZING_ATOM: &str = "正在分析原子性质...";

pub const NO_EXPLANATION: &str = "无法生成解释。";
pub const NO_EXPERIMENT_RESULT: &str = "无法模拟实验。";

pub fn molecule_loaded(name: &str, description: &str) -> String {
    format!("已加载 {name}。\n{description}\n\n请尝试点击化学键进行学习，或在右侧运行虚拟实验。")
}

pub fn running_experiment(action: &str) -> String {
    format!("正在模拟实验: {action}...")
}

/// The info-panel text for a failed request.
pub fn failure_message(operation: Operation, error: &ServiceError) -> &'static str {
    use MalformedKind::*;
    use Operation::*;
    use ServiceError::*;

    match (operation, error) {
        (Explain, MissingCredential) => "请配置 API Key 以获取 AI 解释。",
        (Experiment, MissingCredential) => "请配置 API Key 以运行实验。",
        (Quiz, MissingCredential) => "请配置 API Key 以生成测验。",

        (Explain, Transport(_) | Timeout(_)) => "AI 服务暂时不可用，请稍后再试。",
        (Experiment, Transport(_) | Timeout(_)) => "实验模拟失败。",
        (Quiz, Transport(_) | Timeout(_)) => "测验服务暂时不可用，请稍后再试。",

        (Quiz, Malformed(InvalidJson)) => "生成测验数据解析错误。",
        (Quiz, Malformed(MissingQuestion | InvalidQuiz)) => "生成测验失败，请重试。",
        // Text operations never parse their payload.
        (Explain, Malformed(_)) => NO_EXPLANATION,
        (Experiment, Malformed(_)) => NO_EXPERIMENT_RESULT,
    }
}
