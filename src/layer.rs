//! The SHIORI plugin contract and the charset layer that wraps it
//!
//! [`CharsetLayer`] implements [`Shiori`] over Unicode text while delegating
//! to a child plugin that speaks its own wire representation (raw bytes or
//! binary strings, see [`crate::message`]). Each `request` is one sequential
//! detect, encode, delegate, detect, decode pass; the delegated call is the
//! only suspension point. The layer keeps no state between calls and imposes
//! no serialization of its own: if the child requires at most one in-flight
//! request, that discipline belongs to the caller.

use std::path::Path;

use async_trait::async_trait;
use tracing::trace;

use crate::{CharsetTag, Message, Result, detection};

/// The three-operation SHIORI plugin contract.
///
/// `load` and `unload` return the plugin's integer status (`1` is success by
/// SHIORI convention); a failure status is a value, not an error. Errors are
/// reserved for transport-level faults inside an implementation and travel
/// through wrapping layers unchanged.
#[async_trait]
pub trait Shiori: Send + Sync {
    /// Wire representation this plugin speaks: raw bytes or binary strings.
    type Payload: Message;

    /// Initialize the plugin with its ghost master directory.
    async fn load(&self, dir_path: &Path) -> Result<i32>;

    /// Shut the plugin down.
    async fn unload(&self) -> Result<i32>;

    /// Service one complete protocol message.
    async fn request(&self, request: Self::Payload) -> Result<Self::Payload>;
}

/// Transcoding proxy around a child plugin.
///
/// Callers speak Unicode [`String`]s; the child receives each request encoded
/// into the charset the request declares, and the child's response is decoded
/// using the charset the *response* declares. `load` and `unload` pass
/// through untouched, as do any child errors.
#[derive(Debug)]
pub struct CharsetLayer<S> {
    child: S,
}

impl<S> CharsetLayer<S> {
    /// Wrap `child`, taking exclusive ownership of it for the layer's
    /// lifetime.
    pub fn new(child: S) -> Self {
        Self { child }
    }

    /// Borrow the wrapped plugin.
    pub fn child(&self) -> &S {
        &self.child
    }

    /// Unwrap the layer, returning the child plugin.
    pub fn into_inner(self) -> S {
        self.child
    }
}

#[async_trait]
impl<S> Shiori for CharsetLayer<S>
where
    S: Shiori,
{
    type Payload = String;

    async fn load(&self, dir_path: &Path) -> Result<i32> {
        self.child.load(dir_path).await
    }

    async fn unload(&self) -> Result<i32> {
        self.child.unload().await
    }

    async fn request(&self, request: String) -> Result<String> {
        let charset = detection::from_text(&request);
        trace!(charset = charset.name(), "outbound request charset");
        let outbound = S::Payload::from_unicode(&request, charset);

        let inbound = self.child.request(outbound).await?;

        let charset = inbound.charset();
        trace!(charset = charset.name(), "inbound response charset");
        Ok(inbound.into_unicode(charset))
    }
}
