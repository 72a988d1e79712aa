use std::io::Write;

use kanal::AsyncReceiver;
use wordup_types::AppEvent;

use crate::view::render;

/// Draw frames until the app shuts down
pub async fn ui_loop<W: Write + Send>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    mut out: W,
    prompt: bool,
) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::Render(view) => {
                write!(out, "{}", render(&view))?;
            }
            AppEvent::Notice(message) => {
                writeln!(out, "{message}")?;
            }
            AppEvent::Shutdown => {
                tracing::debug!("[UI] Shutdown received");
                break;
            }
            _ => continue,
        }

        if prompt {
            write!(out, "> ")?;
        }
        out.flush()?;
    }

    Ok(())
}
