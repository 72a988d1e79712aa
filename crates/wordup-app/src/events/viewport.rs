use wordup_core::Session;

use super::Flow;

pub fn handle_resize(session: &mut Session, width: u32) -> Flow {
    session.resize(width);
    tracing::debug!("Resized to {width}, drawer {:?}", session.drawer().state());
    Flow::Render
}

pub fn handle_toggle(session: &mut Session) -> Flow {
    session.toggle_drawer();
    Flow::Render
}
