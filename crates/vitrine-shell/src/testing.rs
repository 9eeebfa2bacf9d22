//! In-memory surfaces for driving the shell in tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use vitrine_common::{PixelRect, ShellError};
use vitrine_config::WindowConfig;

use crate::surface::{PaneSurface, SurfaceFactory};

pub type Log = Rc<RefCell<Vec<String>>>;

pub fn configs(ids: &[&str]) -> Vec<WindowConfig> {
    ids.iter()
        .map(|id| {
            WindowConfig::new(
                *id,
                format!("https://example.test/{id}"),
                PixelRect::new(100, 100, 800, 600),
            )
        })
        .collect()
}

#[derive(Debug)]
pub struct FakeSurface {
    pub id: String,
    pub geometry: PixelRect,
    pub visible: bool,
    pub zoom: u32,
    pub edit_mode: bool,
    pub background: bool,
    pub fail_background: bool,
    log: Log,
}

impl FakeSurface {
    fn record(&self, what: &str) {
        self.log.borrow_mut().push(format!("{}:{what}", self.id));
    }
}

impl PaneSurface for FakeSurface {
    fn geometry(&self) -> PixelRect {
        self.geometry
    }

    fn set_geometry(&mut self, rect: PixelRect) {
        self.geometry = rect;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn reload(&mut self) {
        self.record("reload");
    }

    fn zoom(&self) -> u32 {
        self.zoom
    }

    fn set_zoom(&mut self, percent: u32) {
        self.zoom = percent;
    }

    fn set_edit_mode(&mut self, enabled: bool) {
        self.edit_mode = enabled;
    }

    fn start_background_load(&mut self) -> Result<(), ShellError> {
        if self.fail_background {
            return Err(ShellError::WindowCreation {
                id: self.id.clone(),
                reason: "background view refused".into(),
            });
        }
        self.background = true;
        self.record("start");
        Ok(())
    }

    fn swap_background(&mut self) -> bool {
        let had = std::mem::take(&mut self.background);
        if had {
            self.record("swap");
        }
        had
    }

    fn discard_background(&mut self) {
        self.background = false;
        self.record("discard");
    }

    fn close(&mut self) {
        self.visible = false;
        self.record("close");
    }
}

#[derive(Debug, Default)]
pub struct FakeFactory {
    pub created: Vec<String>,
    pub fail_create: HashSet<String>,
    pub fail_background: bool,
    pub log: Log,
}

impl SurfaceFactory<FakeSurface> for FakeFactory {
    fn create(&mut self, config: &WindowConfig) -> Result<FakeSurface, ShellError> {
        if self.fail_create.contains(&config.id) {
            return Err(ShellError::WindowCreation {
                id: config.id.clone(),
                reason: "refused".into(),
            });
        }
        self.created.push(config.id.clone());
        Ok(FakeSurface {
            id: config.id.clone(),
            geometry: PixelRect::default(),
            visible: false,
            zoom: 100,
            edit_mode: false,
            background: false,
            fail_background: self.fail_background,
            log: Rc::clone(&self.log),
        })
    }
}
