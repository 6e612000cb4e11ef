//! C api.
//!
//! Handles are opaque pointers to a `SharedSha3`, so one handle may be used
//! from several threads. Functions returning `i32` report 0 on success and a
//! negative `Error::code` otherwise.

use core::ffi::{c_char, c_void};

use crate::errors::{Error, Result};
use crate::sha3::{Domain, HashVariant, SharedSha3};

unsafe fn handle_ref<'a>(handle: *const c_void) -> Result<&'a SharedSha3> {
    unsafe { (handle as *const SharedSha3).as_ref() }.ok_or(Error::NullHandle)
}

fn status(r: Result<()>) -> i32 {
    match r {
        Ok(()) => 0,
        Err(e) => e.code(),
    }
}

fn into_handle(h: SharedSha3) -> *mut c_void {
    Box::into_raw(Box::new(h)) as *mut c_void
}

fn new_handle(bits: usize, domain: Domain) -> *mut c_void {
    match HashVariant::from_bits(bits) {
        Ok(variant) => into_handle(SharedSha3::with_domain(variant, domain)),
        Err(_) => core::ptr::null_mut(),
    }
}

/// sha3_new creates a hash object for a 224, 256, 384 or 512 bit digest.
/// Returns null for any other length. Release with `sha3_free`.
#[unsafe(no_mangle)]
pub extern "C" fn sha3_new(bits: usize) -> *mut c_void {
    new_handle(bits, Domain::Keccak)
}

/// Same as `sha3_new`, padding with the FIPS 202 domain byte.
#[unsafe(no_mangle)]
pub extern "C" fn sha3_new_fips202(bits: usize) -> *mut c_void {
    new_handle(bits, Domain::Fips202)
}

/// sha3_update absorbs `len` bytes at `data`. A null `data` with a non-zero
/// length is rejected and leaves the object unchanged.
///
/// # Safety
/// `handle` is null or came from this library and was not freed; `data` is
/// null or valid for `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sha3_update(handle: *mut c_void, data: *const u8, len: usize) -> i32 {
    status((|| {
        let h = unsafe { handle_ref(handle) }?;
        if len == 0 {
            return Ok(());
        }
        if data.is_null() {
            return Err(Error::InvalidInput);
        }
        h.update(unsafe { core::slice::from_raw_parts(data, len) });
        Ok(())
    })())
}

/// sha3_digest writes the digest to `out`, which must hold exactly
/// `out_len == sha3_digest_size(handle)` bytes.
///
/// # Safety
/// `handle` as for `sha3_update`; `out` is valid for `out_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sha3_digest(handle: *const c_void, out: *mut u8, out_len: usize) -> i32 {
    status((|| {
        let h = unsafe { handle_ref(handle) }?;
        if out.is_null() {
            return Err(Error::OutputLength {
                expected: h.digest_size(),
                actual: 0,
            });
        }
        h.digest_into(unsafe { core::slice::from_raw_parts_mut(out, out_len) })
    })())
}

/// sha3_hexdigest writes the lowercase hex digest followed by a NUL byte;
/// `out_len` must be at least `2 * sha3_digest_size(handle) + 1`.
///
/// # Safety
/// `handle` as for `sha3_update`; `out` is valid for `out_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sha3_hexdigest(handle: *const c_void, out: *mut c_char, out_len: usize) -> i32 {
    status((|| {
        let h = unsafe { handle_ref(handle) }?;
        let need = 2 * h.digest_size() + 1;
        if out.is_null() || out_len < need {
            return Err(Error::OutputLength {
                expected: need,
                actual: if out.is_null() { 0 } else { out_len },
            });
        }
        let out = unsafe { core::slice::from_raw_parts_mut(out as *mut u8, need) };
        hex::encode_to_slice(h.digest(), &mut out[..need - 1]).map_err(|_| Error::OutputLength {
            expected: need,
            actual: out_len,
        })?;
        out[need - 1] = 0;
        Ok(())
    })())
}

/// sha3_copy returns an independent object with the same absorbed input,
/// or null if `handle` is null.
///
/// # Safety
/// `handle` as for `sha3_update`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sha3_copy(handle: *const c_void) -> *mut c_void {
    match unsafe { handle_ref(handle) } {
        Ok(h) => into_handle(h.copy()),
        Err(_) => core::ptr::null_mut(),
    }
}

/// # Safety
/// `handle` as for `sha3_update`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sha3_reset(handle: *mut c_void) -> i32 {
    status(unsafe { handle_ref(handle) }.map(|h| h.reset()))
}

unsafe fn metadata(handle: *const c_void, f: impl FnOnce(&SharedSha3) -> usize) -> i32 {
    match unsafe { handle_ref(handle) } {
        Ok(h) => f(h) as i32,
        Err(e) => e.code(),
    }
}

/// Digest length in bytes, or a negative error code.
///
/// # Safety
/// `handle` as for `sha3_update`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sha3_digest_size(handle: *const c_void) -> i32 {
    unsafe { metadata(handle, SharedSha3::digest_size) }
}

/// Block length in bytes, or a negative error code.
///
/// # Safety
/// `handle` as for `sha3_update`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sha3_block_size(handle: *const c_void) -> i32 {
    unsafe { metadata(handle, SharedSha3::block_size) }
}

/// Rate in bits, or a negative error code.
///
/// # Safety
/// `handle` as for `sha3_update`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sha3_rate(handle: *const c_void) -> i32 {
    unsafe { metadata(handle, SharedSha3::rate) }
}

/// Capacity in bits, or a negative error code.
///
/// # Safety
/// `handle` as for `sha3_update`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sha3_capacity(handle: *const c_void) -> i32 {
    unsafe { metadata(handle, SharedSha3::capacity) }
}

/// # Safety
/// `handle` is null or came from this library and is not used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sha3_free(handle: *mut c_void) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle as *mut SharedSha3) });
    }
}
