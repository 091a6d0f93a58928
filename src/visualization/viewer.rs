use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::window::WindowResolution;
use log::info;

use crate::visualization::plot::Figure;

/// Tags each sprite with its position in the figure list
#[derive(Component)]
struct FigureIndex(pub usize);

/// Figures handed to the viewer plus the one on screen
#[derive(Resource)]
struct Gallery {
    figures: Vec<Figure>,
    current: usize,
}

/// Show rendered figures in one window, one at a time
///
/// Right/Space shows the next figure, Left the previous one. Returns when the
/// window is closed. A windowing event loop can only be created once per
/// process, so all figures of a run share this single window.
pub fn run_viewer(figures: Vec<Figure>) {
    let Some(first) = figures.first() else {
        return;
    };
    info!("run_viewer: showing {} figures", figures.len());

    let window = Window {
        title: first.title.clone(),
        resolution: WindowResolution::new(first.width as f32, first.height as f32),
        ..Default::default()
    };

    App::new()
        .insert_resource(Gallery { figures, current: 0 })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..Default::default()
                })
                // env_logger already owns the `log` facade
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_figures_system)
        .add_systems(Update, (cycle_figures_system, sync_visibility_system).chain())
        .run();
}

fn setup_figures_system(mut commands: Commands, gallery: Res<Gallery>, mut images: ResMut<Assets<Image>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, figure) in gallery.figures.iter().enumerate() {
        let image = Image::new(
            Extent3d {
                width: figure.width,
                height: figure.height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            figure.rgba(),
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::RENDER_WORLD,
        );

        let visibility = if i == gallery.current {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };

        commands.spawn((
            SpriteBundle {
                texture: images.add(image),
                visibility,
                ..Default::default()
            },
            FigureIndex(i),
        ));
    }
}

fn cycle_figures_system(keys: Res<ButtonInput<KeyCode>>, mut gallery: ResMut<Gallery>, mut windows: Query<&mut Window>) {
    let n = gallery.figures.len();
    let next = if keys.just_pressed(KeyCode::ArrowRight) || keys.just_pressed(KeyCode::Space) {
        (gallery.current + 1) % n
    } else if keys.just_pressed(KeyCode::ArrowLeft) {
        (gallery.current + n - 1) % n
    } else {
        return;
    };

    gallery.current = next;
    for mut window in &mut windows {
        window.title = gallery.figures[next].title.clone();
    }
}

fn sync_visibility_system(gallery: Res<Gallery>, mut query: Query<(&FigureIndex, &mut Visibility)>) {
    if !gallery.is_changed() {
        return;
    }
    for (FigureIndex(i), mut visibility) in &mut query {
        *visibility = if *i == gallery.current {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
