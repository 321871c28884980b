use super::open_controller;
use crate::cli::QuizArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::ui;
use chemlab::workflows::presenter::Choice;
use chemlab::workflows::session::Phase;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run(args: QuizArgs, app: &AppConfig) -> Result<()> {
    let mut controller = open_controller(app, Some(&args.molecule))?;
    if controller.start_quiz().await? != Phase::QuizOpen {
        print!("{}", ui::info_panel(controller.session()));
        return Ok(());
    }

    let Some(presenter) = controller.session().quiz() else {
        return Ok(());
    };
    print!("{}", ui::quiz_view(presenter));
    let option_count = presenter.quiz().options.len();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let answer = match args.answer {
            Some(n) => n,
            None => {
                println!("请输入选项序号 (1-{option_count}):");
                let Some(line) = lines.next_line().await? else {
                    return Ok(());
                };
                match line.trim().parse::<usize>() {
                    Ok(n) => n,
                    Err(_) => continue,
                }
            }
        };

        match controller.answer(answer.wrapping_sub(1))? {
            Choice::Locked(_) | Choice::AlreadyAnswered => break,
            Choice::OutOfRange if args.answer.is_some() => {
                return Err(CliError::Argument(format!(
                    "Option {answer} is out of range (1-{option_count})"
                )));
            }
            Choice::OutOfRange => continue,
        }
    }

    if let Some(presenter) = controller.session().quiz() {
        print!("{}", ui::quiz_view(presenter));
    }
    controller.close_quiz()?;
    Ok(())
}
