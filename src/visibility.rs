/// Flip the control-strip visibility flag and return the new value.
pub fn toggle_visibility(visible: &mut bool) -> bool {
    let old = *visible;
    let next = !old;
    tracing::debug!(from = ?old, to = ?next, "control strip visibility updated");
    *visible = next;
    next
}
