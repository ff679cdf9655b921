//! TEAM_423: Slab object cache (fixed object size).
//!
//! A named pool of equal-sized objects carved out of host-provided memory
//! regions. Objects are handed out zeroed and recycled through an intrusive
//! free list threaded through the free objects themselves, so the cache
//! needs no metadata allocation of its own.
//!
//! The cache never acquires or releases backing memory: regions are seeded
//! by whoever owns them (boot code, a frame allocator) via [`ObjectCache::grow`]
//! and stay with the cache for its lifetime.

use core::mem::{align_of, size_of};
use core::ptr::NonNull;

use lum_utils::Mutex;

/// Free objects double as list links.
struct FreeLink {
    next: Option<NonNull<FreeLink>>,
}

struct Inner {
    free: Option<NonNull<FreeLink>>,
    total: usize,
    in_use: usize,
}

/// Per-type object pool with a lock-protected free list.
pub struct ObjectCache {
    name: &'static str,
    object_size: usize,
    inner: Mutex<Inner>,
}

impl ObjectCache {
    /// Smallest usable object size: a free object must hold its list link.
    pub const MIN_OBJECT_SIZE: usize = size_of::<FreeLink>();

    /// Create an empty cache. Sizes below [`Self::MIN_OBJECT_SIZE`] are
    /// rounded up so the free link always fits.
    pub const fn new(name: &'static str, object_size: usize) -> Self {
        let object_size = if object_size < Self::MIN_OBJECT_SIZE {
            Self::MIN_OBJECT_SIZE
        } else {
            object_size
        };
        Self {
            name,
            object_size,
            inner: Mutex::new(Inner {
                free: None,
                total: 0,
                in_use: 0,
            }),
        }
    }

    /// Seed the cache with a backing region, carving it into objects.
    ///
    /// Returns the number of objects added. The region may be larger than a
    /// multiple of the object stride; the tail is wasted, not misused.
    ///
    /// # Safety
    /// `region..region+len` must be writable memory owned by the caller,
    /// unused by anything else, and valid for the lifetime of the cache.
    pub unsafe fn grow(&self, region: NonNull<u8>, len: usize) -> usize {
        let stride = self.stride();
        let base = region.as_ptr() as usize;
        let aligned = base.next_multiple_of(align_of::<FreeLink>());
        let end = base + len;

        let mut inner = self.inner.lock();
        let mut added = 0;
        let mut at = aligned;
        while at + stride <= end {
            // SAFETY: `at` is in-bounds, aligned for FreeLink, and exclusively ours
            unsafe {
                let link = at as *mut FreeLink;
                (*link).next = inner.free;
                inner.free = NonNull::new(link);
            }
            at += stride;
            added += 1;
        }
        inner.total += added;
        added
    }

    /// Take one object from the cache, zeroed. Returns `None` when empty.
    pub fn acquire(&self) -> Option<NonNull<u8>> {
        let mut inner = self.inner.lock();
        let link = inner.free?;
        // SAFETY: every pointer on the free list came from a seeded region
        // and is only reachable while on the list
        unsafe {
            inner.free = link.as_ref().next;
            inner.in_use += 1;
            drop(inner);
            core::ptr::write_bytes(link.as_ptr().cast::<u8>(), 0, self.object_size);
        }
        Some(link.cast())
    }

    /// Return an object to the cache.
    ///
    /// # Safety
    /// `obj` must have come from [`Self::acquire`] on this same cache and
    /// must not be used or released again afterwards.
    pub unsafe fn release(&self, obj: NonNull<u8>) {
        let link: NonNull<FreeLink> = obj.cast();
        let mut inner = self.inner.lock();
        // SAFETY: caller guarantees `obj` is an idle object of this cache
        unsafe {
            link.as_ptr().write(FreeLink { next: inner.free });
        }
        inner.free = Some(link);
        inner.in_use -= 1;
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Object size after minimum rounding.
    pub fn object_size(&self) -> usize {
        self.object_size
    }

    /// Objects currently handed out.
    pub fn in_use(&self) -> usize {
        self.inner.lock().in_use
    }

    /// Objects ever seeded into the cache.
    pub fn total(&self) -> usize {
        self.inner.lock().total
    }

    fn stride(&self) -> usize {
        self.object_size.next_multiple_of(align_of::<FreeLink>())
    }
}

// SAFETY: ObjectCache is safe to Send/Sync because:
// - the free list and counters are only touched under the interior Mutex
// - objects live in caller-seeded regions that outlive the cache
unsafe impl Send for ObjectCache {}
unsafe impl Sync for ObjectCache {}

// ============================================================================
// Unit Tests
// ============================================================================
