//! Handler for the `exchanges` command.

use super::output;
use crate::infrastructure::exchange::Registry;

pub(super) fn execute(registry: &Registry, selected: &str) {
    output::section("Exchanges");
    for name in registry.list() {
        if name == selected && !output::is_json() {
            output::item(format!("{name} {}", output::muted("(selected)")));
        } else {
            output::item(name);
        }
    }
}
