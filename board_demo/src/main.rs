//! Headless board demo
//!
//! Binds a few items to a renderer host and sweeps a synthetic cursor over a
//! slider, logging what the renderers end up showing each frame. Pass a
//! `.toml` or `.ron` path to override the default renderer configuration.

use hover_board::prelude::*;

const FRAMES: u32 = 12;

struct BoardDemo {
    host: RendererHost,
    toggle: ItemKey,
    volume: ItemKey,
}

impl BoardDemo {
    fn new(config: RendererConfig) -> Result<Self, HostError> {
        let mut host = RendererHost::new(config);

        let toggle = host.add_item(ItemData::checkbox("Lights", false))?;
        host.add_item_at(
            ItemData::parent("Settings"),
            Transform::from_position(Vec3::new(0.0, -12.0, 0.0)),
        )?;

        let volume_data = SliderItem::new(0.0, 100.0)
            .with_value(0.3)
            .with_snaps(11)
            .with_allow_jump(true);
        let volume = host.add_item_at(
            ItemData::slider("Volume", volume_data),
            Transform::from_position(Vec3::new(12.0, 0.0, 0.0)),
        )?;

        Ok(Self { host, toggle, volume })
    }

    fn step(&mut self, frame: u32) {
        let t = frame as f32 / (FRAMES - 1) as f32;

        // Cursor sweeps up the slider; it grabs the handle for the second half.
        let cursor = Vec3::new(12.0, -5.0 + 10.0 * t, 0.5);
        let highlight = match self.host.nearest_world_position(self.volume, cursor) {
            Ok(nearest) => {
                let distance = (nearest - cursor).norm();
                HighlightState::with_highlight(Highlight::new(nearest, distance, 1.0 - distance), true)
            }
            Err(err) => {
                log::debug!("No highlight on frame {frame}: {err}");
                HighlightState::none()
            }
        };
        if let Some(state) = self.host.highlight_mut(self.volume) {
            *state = highlight;
        }
        if let Some(data) = self.host.item_mut(self.volume).and_then(ItemData::as_slider_mut) {
            data.is_sticky_selected = t >= 0.5;
        }

        if frame == FRAMES / 2 {
            if let Some(ItemKind::Checkbox { value }) = self.host.item_mut(self.toggle).map(|item| &mut item.kind) {
                *value = true;
            }
        }

        for (key, err) in self.host.tick() {
            log::error!("Item {key:?} failed: {err}");
        }

        self.report(frame);
    }

    fn report(&self, frame: u32) {
        if let Some(button) = self.host.button_for(self.toggle) {
            log::info!(
                "[{frame:2}] {} icons={:?}/{:?}",
                button.canvas.label_text,
                button.canvas.icons.outer,
                button.canvas.icons.inner
            );
        }

        if let Some(slider) = self.host.slider_for(self.volume) {
            log::info!(
                "[{frame:2}] {} handle={:.3} jump={:.3} segments={}",
                slider.handle_button.canvas.label_text,
                slider.handle_value,
                slider.jump_value,
                slider.track_segments().len()
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading renderer config from {path}");
            RendererConfig::load_from_file(&path)?
        }
        None => RendererConfig::default(),
    };

    log::info!("Starting board demo");
    let mut demo = BoardDemo::new(config)?;

    for frame in 0..FRAMES {
        demo.step(frame);
    }

    log::info!("Board demo finished after {} frames", demo.host.frame());
    Ok(())
}
