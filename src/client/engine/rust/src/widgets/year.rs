/* src/client/engine/rust/src/widgets/year.rs */

use folio_dom::{Document, NodeId};
use tracing::debug;

pub fn year_label(start_year: i32, current_year: i32) -> String {
  if current_year > start_year { format!("{start_year} – {current_year}") } else { start_year.to_string() }
}

/// Fill `#year`. Returns the element written, if present.
pub fn init(doc: &mut Document, start_year: i32, current_year: i32) -> Option<NodeId> {
  let Some(node) = doc.element_by_id("year") else {
    debug!("footer year: no #year element");
    return None;
  };
  doc.set_text_content(node, &year_label(start_year, current_year));
  Some(node)
}
