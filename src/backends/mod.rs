//======================================================================
// src/backends/mod.rs
// Selects the block-function backend at compile time.
//======================================================================

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "simd")] {
        pub(crate) mod simd;
        // Kept alongside the SIMD backend as the consistency reference.
        #[allow(dead_code)]
        pub(crate) mod soft;
        pub(crate) use self::simd::block;
    } else {
        pub(crate) mod soft;
        pub(crate) use self::soft::block;
    }
}
