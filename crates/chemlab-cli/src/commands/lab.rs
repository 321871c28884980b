use super::open_controller;
use super::render::{molecule_svg, write_svg};
use crate::cli::LabArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::ui;
use chemlab::core::catalog::Catalog;
use chemlab::workflows::presenter::Choice;
use chemlab::workflows::session::{Session, SessionError};
use nalgebra::Point2;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum LabCommand {
    Molecule(String),
    Click(String),
    Tap(f64, f64),
    Action(String),
    Quiz,
    Answer(usize),
    Close,
    Render(Option<PathBuf>),
    Show,
    Status,
    Help,
    Quit,
    Empty,
}

pub fn parse_command(line: &str) -> std::result::Result<LabCommand, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    let require = |what: &str| -> std::result::Result<String, String> {
        if rest.is_empty() {
            Err(format!("用法: {word} <{what}>"))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" => LabCommand::Empty,
        "molecule" | "m" => LabCommand::Molecule(require("id")?),
        "click" | "c" => LabCommand::Click(require("id")?),
        "tap" => {
            let mut coords = rest.split_whitespace().map(str::parse::<f64>);
            match (coords.next(), coords.next(), coords.next()) {
                (Some(Ok(x)), Some(Ok(y)), None) => LabCommand::Tap(x, y),
                _ => return Err("用法: tap <x> <y>".to_string()),
            }
        }
        "action" | "a" => LabCommand::Action(require("n|label")?),
        "quiz" => LabCommand::Quiz,
        "answer" => {
            let n = require("n")?;
            match n.parse::<usize>() {
                Ok(n) if n >= 1 => LabCommand::Answer(n),
                _ => return Err(format!("无效的选项序号: {n}")),
            }
        }
        "close" => LabCommand::Close,
        "render" => LabCommand::Render((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "show" => LabCommand::Show,
        "status" => LabCommand::Status,
        "help" | "?" => LabCommand::Help,
        "quit" | "exit" | "q" => LabCommand::Quit,
        other => return Err(format!("未知命令: {other} (输入 help 查看帮助)")),
    };
    Ok(command)
}

pub async fn run(args: LabArgs, app: &AppConfig) -> Result<()> {
    let mut controller = open_controller(app, args.molecule.as_deref())?;
    info!("Lab session started");

    print!(
        "{}",
        ui::molecule_list(Catalog::global(), Some(&controller.session().molecule().id))
    );
    print!("{}", ui::info_panel(controller.session()));
    println!("{}", ui::lab_help());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        debug!(?command, "Lab command");

        let result = match command {
            LabCommand::Empty => Ok(()),
            LabCommand::Quit => break,
            LabCommand::Help => {
                println!("{}", ui::lab_help());
                Ok(())
            }
            LabCommand::Status => {
                println!("{}", ui::status_line(controller.session()));
                Ok(())
            }
            LabCommand::Show => {
                print!("{}", ui::molecule_card(controller.session().molecule()));
                Ok(())
            }
            LabCommand::Molecule(id) => controller.select_molecule(&id).map(|()| {
                print!(
                    "{}",
                    ui::molecule_list(Catalog::global(), Some(&controller.session().molecule().id))
                );
                print!("{}", ui::info_panel(controller.session()));
            }),
            LabCommand::Click(id) => controller
                .click(&id)
                .await
                .map(|()| print!("{}", ui::info_panel(controller.session()))),
            LabCommand::Tap(x, y) => match controller.click_at(Point2::new(x, y)).await {
                Ok(Some(_)) => {
                    print!("{}", ui::info_panel(controller.session()));
                    Ok(())
                }
                Ok(None) => {
                    println!("({x}, {y}) 处没有原子或化学键。");
                    Ok(())
                }
                Err(e) => Err(e),
            },
            LabCommand::Action(key) => match controller.session().resolve_action(&key) {
                Some(label) => controller
                    .lab_action(label)
                    .await
                    .map(|()| print!("{}", ui::info_panel(controller.session()))),
                None => {
                    println!("当前分子没有这个实验。可选:");
                    print!("{}", ui::lab_actions(controller.session().molecule()));
                    Ok(())
                }
            },
            LabCommand::Quiz => controller.start_quiz().await.map(|_| {
                match controller.session().quiz() {
                    Some(presenter) => print!("{}", ui::quiz_view(presenter)),
                    None => print!("{}", ui::info_panel(controller.session())),
                }
            }),
            LabCommand::Answer(n) => controller.answer(n - 1).map(|choice| {
                if choice == Choice::OutOfRange {
                    println!("没有第 {n} 个选项。");
                }
                if let Some(presenter) = controller.session().quiz() {
                    print!("{}", ui::quiz_view(presenter));
                }
            }),
            LabCommand::Close => controller.close_quiz(),
            LabCommand::Render(path) => {
                println!("{}", render_diagram(controller.session(), path.as_deref()));
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{}", describe_refusal(&e));
        }
    }

    info!("Lab session ended");
    Ok(())
}

/// Prints the diagram or writes it to `path`. A failed write is reported in
/// the returned line and leaves the session running.
fn render_diagram(session: &Session<'_>, path: Option<&Path>) -> String {
    let svg = molecule_svg(session.molecule(), session.selection());
    let Some(path) = path else {
        return svg;
    };
    match write_svg(path, &svg) {
        Ok(()) => format!("✓ Diagram written to: {}", path.display()),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not write diagram");
            format!("❌ 无法写入 {}: {e}", path.display())
        }
    }
}

fn describe_refusal(err: &SessionError) -> String {
    match err {
        SessionError::Busy => "正在处理上一个请求，请稍候。".to_string(),
        SessionError::QuizOpen => "请先回答或关闭当前测验 (close)。".to_string(),
        SessionError::NoQuiz => "当前没有打开的测验。".to_string(),
        other => other.to_string(),
    }
}
