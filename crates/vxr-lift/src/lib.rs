//! Producer library binding.
//!
//! Loads the lifter as a shared library, runs its one-time
//! initialization, and turns raw machine bytes into bound superblock
//! views. The producer keeps a single output buffer per process, so
//! every lift invalidates the previous result; a [`Lifted`] result
//! borrows its [`Lifter`] mutably and keeps the process-wide lift lock
//! until dropped, so an overlapping lift through any other handle
//! blocks instead of overwriting memory a live view still reads.

mod arch;
mod config;
pub mod guest;

pub use arch::*;
pub use config::*;

use std::marker::PhantomData;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use libloading::os::unix::{Library, RTLD_NOW, Symbol};
use parking_lot::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, error, trace};
use vxr_decode::raw::RawSb;
use vxr_decode::{Block, DecodeError};

/// C entry running the producer's one-time setup. Nonzero means ready.
pub type VexInitFn =
    unsafe extern "C" fn(opt_level: i32, traceflags: i32, strict_block_end: i32) -> i32;

/// C entry lifting one block. Returns the root superblock, or null when
/// the bytes cannot be lifted. The result lives in the producer's
/// single output buffer until the next call.
pub type VexLiftFn = unsafe extern "C" fn(
    arch: u32,
    endness: u32,
    bytes: *const u8,
    num_bytes: u64,
    guest_addr: u64,
    max_insns: u32,
    max_bytes: u32,
) -> *const RawSb;

/// Errors from loading or invoking the producer.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("Failed to load producer library: {0}")]
    Load(#[from] libloading::Error),

    #[error("Producer library not found: {0}")]
    LibraryNotFound(String),

    #[error("Failed to find symbol '{0}': {1}")]
    SymbolNotFound(String, libloading::Error),

    #[error("Producer initialization failed")]
    InitFailed,

    #[error("Producer could not lift {len} bytes at {addr:#x}")]
    LiftFailed { addr: u64, len: usize },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, LiftError>;

static PRODUCER_INIT: Once = Once::new();
static PRODUCER_READY: AtomicBool = AtomicBool::new(false);
// The producer's scratch buffers are not reentrant, even from separate
// library handles, which all share one loaded module. Taken for the
// lift call and then held by the returned [`Lifted`] until it drops.
static LIFT_LOCK: Mutex<()> = Mutex::new(());

/// Resolved producer entry points.
#[derive(Clone, Copy)]
struct ProducerApi {
    init: VexInitFn,
    lift: VexLiftFn,
}

impl ProducerApi {
    unsafe fn load(lib: &Library) -> Result<Self> {
        unsafe {
            Ok(Self {
                init: load_symbol(lib, b"vex_init", "vex_init")?,
                lift: load_symbol(lib, b"vex_lift", "vex_lift")?,
            })
        }
    }
}

unsafe fn load_symbol<T: Copy>(
    lib: &Library,
    symbol: &'static [u8],
    label: &'static str,
) -> Result<T> {
    unsafe {
        let sym: Symbol<T> = lib.get(symbol).map_err(|e| {
            error!(symbol = label, "symbol not found in producer library");
            LiftError::SymbolNotFound(label.to_string(), e)
        })?;
        Ok(*sym)
    }
}

/// One lift invocation's inputs.
#[derive(Clone, Copy, Debug)]
pub struct LiftRequest<'b> {
    pub arch: VexArch,
    pub endness: VexEndness,
    /// Machine code to disassemble, starting at the block's entry.
    pub bytes: &'b [u8],
    /// Guest address of the first byte.
    pub addr: u64,
    /// Overrides the configured instruction limit when set.
    pub max_insns: Option<u32>,
}

/// An initialized producer. Holding one is the proof that the one-time
/// setup ran; there is no separate "is initialized" query.
pub struct Lifter {
    _lib: Library,
    api: ProducerApi,
    config: LiftConfig,
}

impl Lifter {
    /// Loads the producer library and ensures it is initialized.
    ///
    /// Initialization happens once per process with the first opener's
    /// configuration; a failed initialization is permanent and every
    /// later open reports it again.
    pub fn open(path: impl AsRef<Path>, config: LiftConfig) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            error!(path = %path.display(), "producer library not found");
            return Err(LiftError::LibraryNotFound(path.display().to_string()));
        }

        // RTLD_NOW so a missing transitive symbol surfaces here and not
        // partway through a lift.
        debug!(path = %path.display(), "loading producer library");
        let lib = unsafe { Library::open(Some(path), RTLD_NOW)? };
        let api = unsafe { ProducerApi::load(&lib)? };

        PRODUCER_INIT.call_once(|| {
            let ok = unsafe {
                (api.init)(
                    config.opt_level,
                    config.traceflags,
                    i32::from(config.strict_block_end),
                )
            };
            PRODUCER_READY.store(ok != 0, Ordering::Release);
        });
        if !PRODUCER_READY.load(Ordering::Acquire) {
            return Err(LiftError::InitFailed);
        }

        trace!(
            opt_level = config.opt_level,
            max_insns = config.max_insns,
            strict_block_end = config.strict_block_end,
            "producer ready"
        );
        Ok(Self {
            _lib: lib,
            api,
            config,
        })
    }

    /// The configuration this lifter fills into requests.
    #[must_use]
    pub const fn config(&self) -> LiftConfig {
        self.config
    }

    /// Lifts one block of machine code.
    ///
    /// The mutable borrow lasts as long as the returned [`Lifted`], so
    /// this lifter cannot overwrite the producer's buffer while views
    /// into it are alive. The result also holds the lift lock, so a
    /// lift through any other handle blocks until it is dropped; on
    /// one thread, drop the previous result before lifting again.
    pub fn lift(&mut self, request: LiftRequest<'_>) -> Result<Lifted<'_>> {
        let max_insns = request.max_insns.unwrap_or(self.config.max_insns);

        let guard = LIFT_LOCK.lock();
        let sb = unsafe {
            (self.api.lift)(
                request.arch as u32,
                request.endness as u32,
                request.bytes.as_ptr(),
                request.bytes.len() as u64,
                request.addr,
                max_insns,
                self.config.max_bytes,
            )
        };

        if sb.is_null() {
            error!(
                addr = format!("{:#x}", request.addr),
                len = request.bytes.len(),
                arch = %request.arch,
                "producer failed to lift"
            );
            return Err(LiftError::LiftFailed {
                addr: request.addr,
                len: request.bytes.len(),
            });
        }

        trace!(
            addr = format!("{:#x}", request.addr),
            insns = max_insns,
            "lifted block"
        );
        Ok(Lifted {
            sb,
            _guard: guard,
            _producer: PhantomData,
        })
    }
}

/// Result of one lift call, pinned to the producer buffer it lives in.
///
/// Keeps the process-wide lift lock until dropped, so no handle on any
/// thread can run the producer over the buffer this result points at.
pub struct Lifted<'l> {
    sb: *const RawSb,
    _guard: MutexGuard<'static, ()>,
    _producer: PhantomData<&'l mut Lifter>,
}

impl Lifted<'_> {
    /// Binds the lifted superblock, validating its whole structure.
    pub fn block(&self) -> Result<Block<'_>> {
        // The lift lock held by this result keeps the producer buffer
        // untouched while the view lives.
        Ok(unsafe { Block::from_raw(self.sb) }?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_library_reported() {
        let result = Lifter::open("/nonexistent/libvex.so", LiftConfig::default());
        assert!(matches!(result, Err(LiftError::LibraryNotFound(_))));
    }

    #[test]
    fn test_result_holds_the_lift_lock() {
        // A second handle must not be able to run the producer while a
        // result is alive, or its view would be rewritten in place.
        let lifted = Lifted {
            sb: std::ptr::null(),
            _guard: LIFT_LOCK.lock(),
            _producer: PhantomData,
        };
        assert!(LIFT_LOCK.try_lock().is_none());
        drop(lifted);
        assert!(LIFT_LOCK.try_lock().is_some());
    }

    #[test]
    fn test_errors_render() {
        let failed = LiftError::LiftFailed {
            addr: 0x1000,
            len: 4,
        };
        assert_eq!(
            failed.to_string(),
            "Producer could not lift 4 bytes at 0x1000"
        );
    }
}
