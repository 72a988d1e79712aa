use std::io::BufRead;
use std::thread::JoinHandle;

use kanal::{AsyncSender, Sender};
use wordup_types::{AppEvent, UiEvent};

use crate::command::{Command, USAGE, parse_command};

/// Forward console commands until `quit` or EOF. EOF counts as `quit`.
pub fn read_commands<R: BufRead>(reader: R, tx: &Sender<AppEvent>) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Blank => {}
            Command::Unknown(line) => {
                tracing::debug!("Unknown command: {line}");
                tx.send(AppEvent::Notice(format!("unknown command {line:?}; {USAGE}")))?;
            }
            Command::Events(events) => {
                for event in events {
                    let quit = event == UiEvent::Quit;
                    tx.send(AppEvent::UiEvent(event))?;
                    if quit {
                        return Ok(());
                    }
                }
            }
        }
    }

    tracing::info!("Input closed");
    tx.send(AppEvent::UiEvent(UiEvent::Quit))?;
    Ok(())
}

/// Read stdin on its own thread. It is left detached so a pending read never blocks shutdown.
pub fn spawn_stdin_reader(tx: &AsyncSender<AppEvent>) -> std::io::Result<JoinHandle<()>> {
    let tx = tx.clone_sync();
    std::thread::Builder::new()
        .name("wordup-stdin".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            if let Err(e) = read_commands(stdin.lock(), &tx) {
                tracing::debug!("stdin reader stopped: {e}");
            }
        })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn drain(rx: &kanal::Receiver<AppEvent>) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Ok(Some(event)) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn eof_sends_quit() {
        let (tx, rx) = kanal::unbounded();
        read_commands(Cursor::new("search happy\n"), &tx).unwrap();

        let events = drain(&rx);
        assert!(matches!(
            events.as_slice(),
            [
                AppEvent::UiEvent(UiEvent::SetSearchTerm(_)),
                AppEvent::UiEvent(UiEvent::Search),
                AppEvent::UiEvent(UiEvent::Quit),
            ]
        ));
    }

    #[test]
    fn quit_stops_reading() {
        let (tx, rx) = kanal::unbounded();
        read_commands(Cursor::new("quit\nsearch happy\n"), &tx).unwrap();

        let events = drain(&rx);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], AppEvent::UiEvent(UiEvent::Quit)));
    }

    #[test]
    fn unknown_line_becomes_notice() {
        let (tx, rx) = kanal::unbounded();
        read_commands(Cursor::new("\ndance\n"), &tx).unwrap();

        let events = drain(&rx);
        assert!(matches!(&events[0], AppEvent::Notice(msg) if msg.contains("dance")));
        assert!(matches!(events[1], AppEvent::UiEvent(UiEvent::Quit)));
    }
}
