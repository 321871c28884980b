//! Plain-text views of the lab for a terminal.

use chemlab::core::catalog::Catalog;
use chemlab::core::models::molecule::Molecule;
use chemlab::workflows::presenter::{OptionStyle, QuizPresenter};
use chemlab::workflows::session::{Phase, Session};
use std::fmt::{self, Write};

const RULE: &str = "────────────────────────────────────────";

/// One line per molecule: marker, switcher label, id and formula.
pub fn molecule_list(catalog: &Catalog, active: Option<&str>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_molecule_list(&mut out, catalog, active);
    out
}

fn write_molecule_list(out: &mut String, catalog: &Catalog, active: Option<&str>) -> fmt::Result {
    for (id, label) in catalog.switcher_labels() {
        let marker = if Some(id) == active { "▶" } else { " " };
        let formula = catalog.get(id).map_or("", |m| m.formula.as_str());
        writeln!(out, "{marker} {label:<4} {id:<8} {formula}")?;
    }
    Ok(())
}

pub fn molecule_card(molecule: &Molecule) -> String {
    let mut out = String::new();
    let _ = write_molecule_card(&mut out, molecule);
    out
}

fn write_molecule_card(out: &mut String, molecule: &Molecule) -> fmt::Result {
    writeln!(out, "{} {}", molecule.name, molecule.formula)?;
    writeln!(out, "{}", molecule.description)?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "原子:")?;
    for atom in &molecule.atoms {
        writeln!(
            out,
            "  {:<4} {}  ({}, {})",
            atom.id,
            atom.element.symbol(),
            atom.position.x,
            atom.position.y
        )?;
    }
    writeln!(out, "化学键:")?;
    for bond in &molecule.bonds {
        writeln!(
            out,
            "  {:<4} {}-{}  {:<8} {}",
            bond.id, bond.source_id, bond.target_id, bond.order, bond.description
        )?;
    }
    writeln!(out, "虚拟实验:")?;
    write_lab_actions(out, molecule)
}

pub fn lab_actions(molecule: &Molecule) -> String {
    let mut out = String::new();
    let _ = write_lab_actions(&mut out, molecule);
    out
}

fn write_lab_actions(out: &mut String, molecule: &Molecule) -> fmt::Result {
    for (i, action) in molecule.lab_actions.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, action)?;
    }
    Ok(())
}

/// The info panel: active molecule, selection and the current text.
pub fn info_panel(session: &Session<'_>) -> String {
    let mut out = String::new();
    let _ = write_info_panel(&mut out, session);
    out
}

fn write_info_panel(out: &mut String, session: &Session<'_>) -> fmt::Result {
    let molecule = session.molecule();
    writeln!(out, "{RULE}")?;
    write!(out, "{} {}", molecule.name, molecule.formula)?;
    if let Some(id) = session.selection() {
        write!(out, "  [选中: {id}]")?;
    }
    if session.is_loading() {
        write!(out, "  (加载中)")?;
    }
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{}", session.info().trim_end())?;
    writeln!(out, "{RULE}")
}

pub fn status_line(session: &Session<'_>) -> String {
    let phase = match session.phase() {
        Phase::Idle => "idle".to_string(),
        Phase::Loading(op) => format!("loading ({op})"),
        Phase::QuizOpen => "quiz open".to_string(),
    };
    format!(
        "molecule: {}  selection: {}  state: {}",
        session.molecule().id,
        session.selection().unwrap_or("-"),
        phase
    )
}

pub fn quiz_view(presenter: &QuizPresenter) -> String {
    let mut out = String::new();
    let _ = write_quiz_view(&mut out, presenter);
    out
}

fn write_quiz_view(out: &mut String, presenter: &QuizPresenter) -> fmt::Result {
    writeln!(out, "{RULE}")?;
    writeln!(out, "测验: {}", presenter.question())?;
    for (i, text, style) in presenter.options() {
        let marker = match style {
            OptionStyle::Neutral | OptionStyle::Dimmed => ' ',
            OptionStyle::Correct => '✓',
            OptionStyle::Incorrect => '✗',
        };
        writeln!(out, " {marker} {}. {}", i + 1, text)?;
    }
    if let (Some(banner), Some(explanation)) = (presenter.banner(), presenter.explanation()) {
        writeln!(out)?;
        writeln!(out, "{banner}")?;
        writeln!(out, "{explanation}")?;
    }
    writeln!(out, "{RULE}")
}

pub fn lab_help() -> &'static str {
    "\
命令:
  molecule <id>        切换分子 (ethene / ethane / ethyne)
  click <id>           解释一个原子或化学键 (如 b1, c1)
  tap <x> <y>          点击画布坐标
  action <n|label>     运行虚拟实验
  quiz                 生成测验
  answer <n>           选择测验选项 (从 1 开始)
  close                关闭测验
  render [path]        输出 SVG 分子图
  show                 显示分子详情
  status               显示当前状态
  help                 显示帮助
  quit                 退出"
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemlab::core::quiz::Quiz;

    fn quiz() -> Quiz {
        Quiz {
            question: "乙烷中 C-C 键的类型是？".into(),
            options: vec!["σ 键".into(), "π 键".into()],
            answer: "0".into(),
            explanation: "单键均为 σ 键。".into(),
        }
    }

    #[test]
    fn molecule_list_marks_active_molecule() {
        let list = molecule_list(Catalog::global(), Some("ethane"));
        let lines: Vec<_> = list.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  乙烯"));
        assert!(lines[1].starts_with("▶ 乙烷"));
        assert!(lines[1].contains("C₂H₆"));
    }

    #[test]
    fn molecule_list_follows_switcher_labels() {
        let catalog = Catalog::global();
        let list = molecule_list(catalog, None);
        for (line, (id, label)) in list.lines().zip(catalog.switcher_labels()) {
            assert!(line.starts_with(&format!("  {label}")));
            assert!(line.contains(id));
        }
    }

    #[test]
    fn molecule_card_lists_numbered_actions() {
        let ethene = Catalog::global().require("ethene").unwrap();
        let card = molecule_card(ethene);
        assert!(card.contains("乙烯 (Ethene) C₂H₄"));
        assert!(card.contains("C=C 双键 (1σ + 1π)"));
        assert!(card.contains("  3. 加氢反应 (H₂)"));
    }

    #[test]
    fn info_panel_shows_selection_and_text() {
        let mut session = Session::new(Catalog::global()).unwrap();
        session.begin_explain("b1").unwrap();
        let panel = info_panel(&session);
        assert!(panel.contains("[选中: b1]"));
        assert!(panel.contains("(加载中)"));
        assert!(panel.contains("正在分析化学键性质..."));
        assert!(status_line(&session).contains("loading (explain)"));
    }

    #[test]
    fn quiz_view_reveals_only_after_answer() {
        let mut presenter = QuizPresenter::new(quiz());
        let before = quiz_view(&presenter);
        assert!(!before.contains('✓'));
        assert!(!before.contains("单键均为 σ 键。"));

        presenter.choose(1);
        let after = quiz_view(&presenter);
        assert!(after.contains(" ✓ 1. σ 键"));
        assert!(after.contains(" ✗ 2. π 键"));
        assert!(after.contains("回答错误"));
        assert!(after.contains("单键均为 σ 键。"));
    }
}
