// File: crates/bar-chart-core/src/surface.rs
// Summary: Retained drawing surface with atomic scene replacement, and the host-owned mount handle.

use std::cell::RefCell;
use std::rc::Rc;

use crate::primitive::SceneGraph;
use crate::types::Size;

/// Something the renderer can mount a scene into.
pub trait DrawingSurface {
    /// Drop whatever is drawn and take `scene` in its place.
    fn replace_scene(&mut self, scene: SceneGraph);
    fn clear(&mut self);
    fn scene(&self) -> Option<&SceneGraph>;
}

/// Keeps the last mounted scene. Each replacement bumps `generation`.
#[derive(Clone, Debug, Default)]
pub struct RetainedSurface {
    scene: Option<SceneGraph>,
    generation: u64,
}

impl RetainedSurface {
    pub fn new() -> Self { Self::default() }

    /// Number of scenes mounted so far.
    pub fn generation(&self) -> u64 { self.generation }

    /// Surface size of the current scene, zero when empty.
    pub fn size(&self) -> Size {
        self.scene.as_ref().map(|s| s.surface_size).unwrap_or_default()
    }
}

impl DrawingSurface for RetainedSurface {
    fn replace_scene(&mut self, scene: SceneGraph) {
        self.clear();
        self.scene = Some(scene);
        self.generation += 1;
    }

    fn clear(&mut self) {
        self.scene = None;
    }

    fn scene(&self) -> Option<&SceneGraph> {
        self.scene.as_ref()
    }
}

struct MountState<S> {
    container: Size,
    /// `None` once the host has torn the mount down.
    surface: Option<S>,
}

/// Host-supplied mount point: the measured container plus the surface drawn into it.
///
/// Cloning shares the same mount (single-threaded). After [`MountSurface::detach`]
/// every write is a no-op.
pub struct MountSurface<S: DrawingSurface = RetainedSurface> {
    inner: Rc<RefCell<MountState<S>>>,
}

impl<S: DrawingSurface> Clone for MountSurface<S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl MountSurface<RetainedSurface> {
    pub fn new(container: Size) -> Self {
        Self::with_surface(container, RetainedSurface::new())
    }

    pub fn generation(&self) -> Option<u64> {
        self.inner.borrow().surface.as_ref().map(RetainedSurface::generation)
    }
}

impl<S: DrawingSurface> MountSurface<S> {
    pub fn with_surface(container: Size, surface: S) -> Self {
        Self { inner: Rc::new(RefCell::new(MountState { container, surface: Some(surface) })) }
    }

    /// Current container size, or `None` if detached.
    pub fn measure(&self) -> Option<Size> {
        let state = self.inner.borrow();
        state.surface.as_ref().map(|_| state.container)
    }

    /// Host-side resize. Takes effect on the next pipeline run.
    pub fn set_container_size(&self, size: Size) {
        self.inner.borrow_mut().container = size;
    }

    pub fn is_attached(&self) -> bool {
        self.inner.borrow().surface.is_some()
    }

    /// Tear the mount down, dropping the surface and anything drawn on it.
    pub fn detach(&self) {
        if self.inner.borrow_mut().surface.take().is_some() {
            tracing::debug!("mount surface detached");
        }
    }

    /// Returns `false` (and draws nothing) when detached.
    pub fn replace_scene(&self, scene: SceneGraph) -> bool {
        match self.inner.borrow_mut().surface.as_mut() {
            Some(surface) => {
                surface.replace_scene(scene);
                true
            }
            None => {
                tracing::debug!("replace_scene on a detached mount ignored");
                false
            }
        }
    }

    /// Run `f` against a copy of the mounted scene, if there is one.
    ///
    /// The mount is not borrowed while `f` runs, so `f` may write to it.
    pub fn with_scene<R>(&self, f: impl FnOnce(&SceneGraph) -> R) -> Option<R> {
        let scene = self.snapshot()?;
        Some(f(&scene))
    }

    /// Owned copy of the mounted scene, e.g. for rasterizing.
    pub fn snapshot(&self) -> Option<SceneGraph> {
        self.inner.borrow().surface.as_ref().and_then(|s| s.scene()).cloned()
    }
}
