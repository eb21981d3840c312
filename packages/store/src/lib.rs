pub mod filter;
pub mod models;
pub mod session;
pub mod transfer;

mod memory;
pub use memory::MemoryBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageBackend;

pub use models::{Genre, Song, SongDraft};
pub use session::{Session, SessionBackend, SessionStore};
pub use transfer::GenreTransfer;
