//! Address parsing and canonicalization
//!
//! Converts address strings into the numeric keys the range rows are sorted
//! by: a u32 for IPv4 and a u128 for IPv6. All arithmetic is exact integer
//! arithmetic; the value domain never exceeds 2^128 - 1.
//!
//! The validators here intentionally accept a different language than RFC
//! address parsing, matching the databases' reference reader byte for byte.
//! Notable quirks that are preserved, not fixed:
//!
//! - IPv4 octets accumulate msb-first with explicit weights, so key order
//!   is big-endian numeric order on any host.
//! - An IPv6 "::" gap expands by inserting exactly (7 - colon_count) extra
//!   ':' characters at the gap, not by generic zero-group expansion.
//! - A trailing dotted-quad in an IPv6 address passes validation but is NOT
//!   folded into the key; only its leading hex digits contribute. Known
//!   limitation of the reference.
//! - "::" may repeat when the address already has exactly 7 colons.

/// Check whether `addr` is a valid IPv4 literal for this format
///
/// Digits and '.' only, no leading/trailing dot, exactly four segments each
/// in 0..=255.
pub fn is_ipv4(addr: &str) -> bool {
    if addr.is_empty() || addr.starts_with('.') || addr.ends_with('.') {
        return false;
    }
    if addr.contains("::") {
        return false;
    }
    if !addr.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return false;
    }
    let mut segments = 0;
    for segment in addr.split('.') {
        segments += 1;
        match segment.parse::<u32>() {
            Ok(octet) if octet <= 255 => {}
            _ => return false,
        }
    }
    segments == 4
}

/// Derive the 32-bit search key for an IPv4 literal
///
/// Octets accumulate with weights 16777216/65536/256/1, most significant
/// first. Returns `None` for invalid input.
pub fn ipv4_to_key(addr: &str) -> Option<u32> {
    if !is_ipv4(addr) {
        return None;
    }
    let mut key = 0u32;
    for (segment, weight) in addr.split('.').zip([16777216u32, 65536, 256, 1]) {
        // cannot fail after validation
        let octet = segment.parse::<u32>().ok()?;
        key += octet * weight;
    }
    Some(key)
}

/// Check whether `addr` is a valid IPv6 literal for this format
///
/// Colon count 1..=7; non-empty groups are 1-4 hex digits; the final group
/// may instead be an IPv4 dotted-quad; "::" appears at most once unless the
/// address already has exactly 7 colons.
pub fn is_ipv6(addr: &str) -> bool {
    let colons = addr.matches(':').count();
    if !(1..=7).contains(&colons) {
        return false;
    }
    if addr.matches("::").count() > 1 && colons != 7 {
        return false;
    }
    let groups: Vec<&str> = addr.split(':').collect();
    for (i, group) in groups.iter().enumerate() {
        if group.is_empty() {
            continue;
        }
        if i == groups.len() - 1 && group.contains('.') {
            // dotted-quad tail: validated here, never folded into the key
            if is_ipv4(group) {
                continue;
            }
            return false;
        }
        if group.len() > 4 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return false;
        }
    }
    true
}

/// Derive the 128-bit search key for an IPv6 literal
///
/// Expands the "::" gap so the address splits into 8 groups (index 0 most
/// significant), then accumulates `hex(group) << 16*(7-index)` into a u128.
/// Empty groups contribute zero. Returns `None` for invalid input.
pub fn ipv6_to_key(addr: &str) -> Option<u128> {
    if !is_ipv6(addr) {
        return None;
    }
    let expanded = expand_gap(addr);
    let mut key = 0u128;
    for (i, group) in expanded.split(':').take(8).enumerate() {
        if group.is_empty() {
            continue;
        }
        key += (leading_hex(group) as u128) << (16 * (7 - i));
    }
    Some(key)
}

/// Insert exactly (7 - colon_count) additional ':' characters at the "::"
/// gap so the address always splits into 8 groups. Addresses that already
/// have 7 colons pass through unchanged.
fn expand_gap(addr: &str) -> String {
    let colons = addr.matches(':').count();
    if colons >= 7 {
        return addr.to_string();
    }
    match addr.find("::") {
        Some(gap) => {
            let missing = 7 - colons;
            let mut expanded = String::with_capacity(addr.len() + missing);
            expanded.push_str(&addr[..gap + 1]);
            for _ in 0..missing {
                expanded.push(':');
            }
            expanded.push_str(&addr[gap + 1..]);
            expanded
        }
        None => addr.to_string(),
    }
}

/// Parse the maximal leading run of hex digits in a group
///
/// Validated groups hold at most 4 hex digits; a dotted-quad tail stops at
/// its first '.', which is exactly what leaves it unfolded.
fn leading_hex(group: &str) -> u32 {
    let end = group
        .bytes()
        .position(|b| !b.is_ascii_hexdigit())
        .unwrap_or(group.len());
    if end == 0 {
        return 0;
    }
    u32::from_str_radix(&group[..end], 16).unwrap_or(0)
}
