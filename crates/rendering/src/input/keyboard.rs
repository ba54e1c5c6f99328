use bevy::prelude::*;

/// Ctrl+Q (Cmd+Q on macOS) quits. Escape travels with the pointer events,
/// see `handle_pointer_input`.
pub fn handle_quit_shortcut(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    let modifier = keys.any_pressed([
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::SuperLeft,
        KeyCode::SuperRight,
    ]);
    if modifier && keys.just_pressed(KeyCode::KeyQ) {
        info!("Quit requested from keyboard");
        exit.send(AppExit::Success);
    }
}
