pub mod drawer;
pub mod history;
pub mod session;
pub mod validate;

pub use session::{
    FETCH_FAILED_MESSAGE, INVALID_WORD_MESSAGE, SearchOutcome, SearchTicket, Session,
};
