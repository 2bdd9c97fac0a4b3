/// Return the help text displayed in the help overlay.
pub fn help_text() -> String {
    format!(
        "\
Beer States: every state you've had a beer in

Map:
  green    Had beer there
  red      Not yet
  Tab/m    Switch between boundary map and tile grid

General:
  ?        Toggle help
  q/Esc    Quit

From the command line:
  --complete STATE    Mark a state as completed
  --uncomplete STATE  Put a state back on the list
  --status            Print progress without the map

Version: {}",
        env!("CARGO_PKG_VERSION")
    )
}
