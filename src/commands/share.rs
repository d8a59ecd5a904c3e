//! Share today's result without entering the game

use crate::output::{ShareNotice, copy_to_clipboard, print_share};
use crate::session::{PuzzleSession, Status};
use crate::store::KeyValueStore;

/// Print (and optionally copy) the share text for today's session
///
/// Returns the clipboard notice when a copy was attempted.
pub fn share_today<S: KeyValueStore>(session: &PuzzleSession<S>, copy: bool) -> Option<ShareNotice> {
    let text = session.share_text();
    let notice = copy.then(|| copy_to_clipboard(&text));
    print_share(&text, session.status() == Status::Solved, notice.as_ref());
    notice
}
