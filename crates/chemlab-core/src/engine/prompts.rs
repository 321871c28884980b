//! Instruction texts sent to the language model.
//!
//! Prompts are plain Chinese text. They quote the molecule name, formula and
//! the clicked item or action label verbatim so the model answers about
//! exactly what the learner is looking at.

use crate::core::models::molecule::{Molecule, Selectable};
use std::fmt::{self, Write};

/// Upper bound on the length of an element explanation, in characters.
pub const EXPLANATION_CHAR_LIMIT: usize = 150;

pub fn element_prompt(molecule: &Molecule, selection: Selectable<'_>) -> String {
    let mut prompt = String::new();
    // Writing into a String cannot fail.
    let _ = write_element_prompt(&mut prompt, molecule, selection);
    prompt
}

fn write_element_prompt(
    out: &mut String,
    molecule: &Molecule,
    selection: Selectable<'_>,
) -> fmt::Result {
    writeln!(
        out,
        "你是一位专业的有机化学教授。用户正在查看一个 {} ({}) 分子模型。",
        molecule.name, molecule.formula
    )?;
    writeln!(out, "用户点击了: \"{}\"。", selection.describe())?;
    writeln!(out)?;
    writeln!(out, "请用简洁生动的中文解释这个部分的化学性质。")?;
    writeln!(out)?;
    writeln!(out, "如果选中的是化学键 (如 C=C, C-H):")?;
    writeln!(out, "1. 解释键的类型 (Sigma, Pi).")?;
    writeln!(out, "2. 解释杂化轨道理论 (sp, sp2, sp3).")?;
    writeln!(out, "3. 提及键能或键长的大致比较.")?;
    if let Selectable::Bond(bond) = selection {
        if bond.order.is_multiple() {
            writeln!(out, "4. 这是一个多重键，请提及它的反应活性 (如亲电加成).")?;
        }
    }
    writeln!(out)?;
    writeln!(
        out,
        "保持回答在 {EXPLANATION_CHAR_LIMIT} 字以内，使用 Markdown 格式。"
    )
}

pub fn experiment_prompt(molecule: &Molecule, action: &str) -> String {
    let mut prompt = String::new();
    let _ = write_experiment_prompt(&mut prompt, molecule, action);
    prompt
}

fn write_experiment_prompt(out: &mut String, molecule: &Molecule, action: &str) -> fmt::Result {
    writeln!(out, "你正在指导一个虚拟化学实验。")?;
    writeln!(out, "当前分子: {} ({}).", molecule.name, molecule.formula)?;
    writeln!(out, "用户执行的操作: \"{action}\".")?;
    writeln!(out)?;
    writeln!(out, "请描述实验现象和化学原理：")?;
    writeln!(out, "1. 宏观现象 (例如：颜色变化，气泡，沉淀).")?;
    writeln!(out, "2. 微观原理 (化学反应方程式，断键成键过程).")?;
    writeln!(out, "3. 结论 (是否发生反应，生成了什么).")?;
    writeln!(out)?;
    writeln!(out, "请用 Markdown 格式输出，语气专业且鼓励探索。")
}

pub fn quiz_prompt(molecule: &Molecule) -> String {
    format!(
        "针对 {} ({}) 生成一个简单的单项选择题。answer 字段填写正确选项的序号 (从 0 开始)。",
        molecule.name, molecule.formula
    )
}
