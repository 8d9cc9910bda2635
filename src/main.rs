//! Susnata Todo entry point
//!
//! Handles platform-specific initialization and wires the page to the app.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use susnata_todo::error::{Result, TodoError};
    use susnata_todo::platform::{LocalStorage, SystemClock, input};
    use susnata_todo::renderer::DomSurface;
    use susnata_todo::{Store, TodoApp};

    fn start() -> Result<()> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| TodoError::Dom("no document".to_string()))?;

        let store = Store::new(LocalStorage::open()?);
        let surface = DomSurface::new(document.clone())?;
        let app = Rc::new(RefCell::new(TodoApp::new(store, SystemClock, surface)));

        input::bind(&document, app.clone())?;
        let count = app.borrow_mut().refresh()?;
        log::info!("Susnata Todo running with {} items", count);
        Ok(())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Susnata Todo starting...");
        if let Err(e) = start() {
            log::error!("Startup failed: {}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    web_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Susnata Todo (native) starting...");
    log::info!("The page needs LocalStorage - run with `trunk serve` for the web version");

    if let Err(e) = run_demo() {
        log::error!("Demo failed: {}", e);
    }
}

/// Exercise the app against in-memory storage
#[cfg(not(target_arch = "wasm32"))]
fn run_demo() -> susnata_todo::Result<()> {
    use susnata_todo::platform::SystemClock;
    use susnata_todo::{MemoryStorage, RecordingSurface, Store, TodoApp};

    let mut app = TodoApp::new(
        Store::new(MemoryStorage::new()),
        SystemClock,
        RecordingSurface::new(),
    );
    let milk = app.add("buy milk")?;
    app.add("walk dog")?;
    if let Some(milk) = milk {
        app.delete(milk.id)?;
    }

    for row in &app.surface().rows {
        println!("[{}] {}", row.id, row.text);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
