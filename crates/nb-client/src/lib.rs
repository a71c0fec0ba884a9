//! # nb-client
//!
//! HTTP client for the Nodebucket task endpoints, plus the client-side
//! synchronization model: local `todo`/`done` lists mutated optimistically
//! and pushed to the server, with a transient status banner.
//!
//! Sign-in and a file-backed session live here too so any front end (the
//! CLI today) can share them.

pub mod banner;
pub mod client;
pub mod error;
pub mod http;
pub mod moves;
pub mod session;
pub mod sync;

pub use banner::{Banner, BannerState};
pub use client::{TaskApi, TaskClient};
pub use error::ClientError;
pub use session::{SessionStore, SessionUser, SignIn, require_session};
pub use sync::{OptimisticBoard, TaskSync};
