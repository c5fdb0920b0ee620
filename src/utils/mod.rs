use std::io;
use std::net::IpAddr;
use if_addrs::{get_if_addrs, IfAddr};
use crate::domain::models::LocalInterface;

/// Reads the OS interface table, one entry per interface that has addresses,
/// in interface index order. Link-local addresses are included.
pub fn get_local_interfaces() -> io::Result<Vec<LocalInterface>> {
    let entries = get_if_addrs()?
        .into_iter()
        .map(|iface| {
            let address = match &iface.addr {
                IfAddr::V4(v4) => with_prefix(IpAddr::V4(v4.ip), IpAddr::V4(v4.netmask)),
                IfAddr::V6(v6) => with_prefix(IpAddr::V6(v6.ip), IpAddr::V6(v6.netmask)),
            };
            (iface.name, iface.index, address)
        });
    Ok(group_by_name(entries))
}

/// Formats `ip` as `ip/prefix`, the prefix being the set bits of `netmask`
pub fn with_prefix(ip: IpAddr, netmask: IpAddr) -> String {
    let prefix = match netmask {
        IpAddr::V4(mask) => u32::from(mask).count_ones(),
        IpAddr::V6(mask) => u128::from(mask).count_ones(),
    };
    format!("{}/{}", ip, prefix)
}

/// Groups flat (name, index, address) entries by interface.
///
/// Interfaces are ordered by index, not by first appearance in the address
/// table (which lists every IPv4 entry before any IPv6 one). Interfaces
/// without an index go last. Addresses keep their table order.
pub fn group_by_name<I>(entries: I) -> Vec<LocalInterface>
where
    I: IntoIterator<Item = (String, Option<u32>, String)>,
{
    let mut grouped: Vec<(Option<u32>, LocalInterface)> = Vec::new();
    for (name, index, address) in entries {
        match grouped.iter().position(|(_, iface)| iface.name == name) {
            Some(pos) => grouped[pos].1.addresses.push(address),
            None => grouped.push((index, LocalInterface::new(name, vec![address]))),
        }
    }
    grouped.sort_by_key(|(index, _)| index.unwrap_or(u32::MAX));
    grouped.into_iter().map(|(_, iface)| iface).collect()
}
