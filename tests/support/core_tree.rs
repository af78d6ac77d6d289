// The crate is wasm-only, so host tests rebuild its pure module tree here.
// Paths mirror the crate (`crate::constants`, `crate::core::*`) so the
// included sources resolve unchanged.

mod constants {
    include!("../../src/constants.rs");
}

mod core {
    pub mod capture {
        include!("../../src/core/capture.rs");
    }
    pub mod choreography {
        include!("../../src/core/choreography.rs");
    }
    pub mod clouds {
        include!("../../src/core/clouds.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod cursor {
        include!("../../src/core/cursor.rs");
    }
    pub mod motion {
        include!("../../src/core/motion.rs");
    }
    pub mod overlay {
        include!("../../src/core/overlay.rs");
    }
    pub mod prefs {
        include!("../../src/core/prefs.rs");
    }
    pub mod progress {
        include!("../../src/core/progress.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }
    pub mod session {
        include!("../../src/core/session.rs");
    }
    pub mod sky {
        include!("../../src/core/sky.rs");
    }
    pub mod tier {
        include!("../../src/core/tier.rs");
    }
    pub mod trigger {
        include!("../../src/core/trigger.rs");
    }
}
