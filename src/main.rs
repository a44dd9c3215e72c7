use avian2d::prelude::*;
use bevy::prelude::*;

use olympia_kinematics::content::ContentPlugin;
use olympia_kinematics::core::CorePlugin;
use olympia_kinematics::movement::MovementPlugin;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Olympia Kinematics".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        CorePlugin,
        ContentPlugin,
        MovementPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(olympia_kinematics::debug::DebugPlugin);

    app.run();
}
