//! # Terminal Shell
//!
//! Line-oriented front end: reads commands from stdin, runs them against the
//! [`App`] one at a time and redraws whenever the engine reports a change.

use std::io::Write;
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::{App, AppEvent, View};
use crate::core::error::Result;
use crate::ui;

pub const HELP: &str = "\
Comandos:
  go <caminho>            navegar (ex.: go /ganhar/instagram)
  start <n>               pegar a ação n da lista
  profile | direct        abrir o link da ação (perfil / direto)
  confirm                 confirmar a ação
  skip                    pular a ação
  search [limite] [texto] filtrar o histórico
  withdraw <valor>        solicitar saque
  set <CHAVE> <valor>     editar configuração
  save                    salvar configurações
  show                    redesenhar
  help                    esta ajuda
  quit                    sair";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    /// 1-based index into the action list
    Start(usize),
    Profile,
    Direct,
    Confirm,
    Skip,
    Search { limit: Option<u32>, query: String },
    Withdraw(String),
    Set { key: String, value: String },
    Save,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "go" if !rest.is_empty() => Command::Go(rest.to_string()),
            "go" => return Err("uso: go <caminho>".to_string()),
            "start" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => Command::Start(n),
                _ => return Err("uso: start <n>".to_string()),
            },
            "profile" => Command::Profile,
            "direct" => Command::Direct,
            "confirm" => Command::Confirm,
            "skip" => Command::Skip,
            "search" => {
                let (first, tail) = match rest.split_once(char::is_whitespace) {
                    Some((first, tail)) => (first, tail.trim()),
                    None => (rest, ""),
                };
                match first.parse::<u32>() {
                    Ok(limit) => Command::Search {
                        limit: Some(limit),
                        query: tail.to_string(),
                    },
                    Err(_) => Command::Search {
                        limit: None,
                        query: rest.to_string(),
                    },
                }
            }
            "withdraw" if !rest.is_empty() => Command::Withdraw(rest.to_string()),
            "withdraw" => return Err("uso: withdraw <valor>".to_string()),
            "set" => match rest.split_once(char::is_whitespace) {
                Some((key, value)) => Command::Set {
                    key: key.to_string(),
                    value: value.trim().to_string(),
                },
                None if !rest.is_empty() => Command::Set {
                    key: rest.to_string(),
                    value: String::new(),
                },
                None => return Err("uso: set <CHAVE> <valor>".to_string()),
            },
            "save" => Command::Save,
            "show" | "" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("comando desconhecido: {} (help)", other)),
        };

        Ok(command)
    }
}

/// Run one command. Returns `false` when the shell should exit.
pub async fn execute(app: &App, command: Command) -> bool {
    tracing::debug!(command = ?command, "Shell command");
    match command {
        Command::Go(path) => app.navigate(&path).await,
        Command::Start(n) => app.start_action(n - 1).await,
        Command::Profile => app.open_profile().await,
        Command::Direct => app.open_direct().await,
        Command::Confirm => app.confirm_claim().await,
        Command::Skip => app.skip_claim().await,
        Command::Search { limit, query } => {
            let limit = limit.unwrap_or_else(|| match &app.state.read().view {
                View::History(history) => history.limit,
                _ => crate::app::state::DEFAULT_HISTORY_LIMIT,
            });
            app.search_history(limit, &query).await
        }
        Command::Withdraw(amount) => app.request_withdrawal(&amount).await,
        Command::Set { key, value } => app.edit_setting(&key, &value),
        Command::Save => app.save_settings(),
        Command::Show | Command::Help => {}
        Command::Quit => return false,
    }
    true
}

fn draw(app: &App, extra: Option<&str>) {
    let screen = ui::render(&app.state.read());
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "\x1B[2J\x1B[H{}", screen);
    if let Some(extra) = extra {
        let _ = writeln!(stdout, "\n{}", extra);
    }
    let _ = write!(stdout, "\n> ");
    let _ = stdout.flush();
}

/// Interactive loop. Starts at `initial_path`.
pub async fn run(app: App, initial_path: &str) -> Result<()> {
    app.navigate(initial_path).await;
    draw(&app, None);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("stdin closed");
                    break;
                };
                match line.parse::<Command>() {
                    Ok(Command::Help) => draw(&app, Some(HELP)),
                    Ok(command) => {
                        if !execute(&app, command).await {
                            break;
                        }
                        draw(&app, None);
                    }
                    Err(usage) => draw(&app, Some(&usage)),
                }
            }
            event = app.event_rx.recv() => {
                match event {
                    Ok(AppEvent::ExternalLinkOpened { url }) => {
                        tracing::debug!(url = %url, "Link opened");
                    }
                    Ok(_) => draw(&app, None),
                    Err(_) => break,
                }
            }
        }
    }

    Ok(())
}
