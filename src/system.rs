//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.


#[cfg(any(target_os = "macos", target_os = "ios"))]
extern "C" {
    fn gettimeofday(tp: *mut libc::timeval, tzp: *mut libc::timezone) -> libc::c_int;
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) fn sys_time() -> (i64, u32) {
    use std::ptr::null_mut;

    let mut tv = libc::timeval { tv_sec: 0, tv_usec: 0 };
    let _ = unsafe { gettimeofday(&mut tv, null_mut()) };
    (i64::from(tv.tv_sec), tv.tv_usec as u32 * 1_000)
}

#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(windows)]
pub(crate) fn sys_time() -> (i64, u32) {
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft = FILETIME { dwLowDateTime: 0, dwHighDateTime: 0 };
    unsafe { GetSystemTimeAsFileTime(&mut ft) };

    let hectonanos = (((ft.dwHighDateTime as u64) << 32) | (ft.dwLowDateTime as u64)) as i64 - HECTONANOSEC_TO_UNIX_EPOCH;
    (hectonanos.div_euclid(HECTONANOSECS_IN_SEC), (hectonanos.rem_euclid(HECTONANOSECS_IN_SEC) * 100) as u32)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(not(any(target_os = "macos", target_os = "ios", windows)))]
pub(crate) fn sys_time() -> (i64, u32) {
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts) };
    (i64::from(ts.tv_sec), ts.tv_nsec as u32)
}


#[cfg(test)]
mod test {
    use super::sys_time;

    #[test]
    fn sanity_check() {
        let (seconds, nanos) = sys_time();
        assert!(seconds > 0);
        assert!(nanos < 1_000_000_000);
    }
}
