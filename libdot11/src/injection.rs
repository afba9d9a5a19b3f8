use crate::error::Error;

/// The transport a crafted frame is handed to for injection.
///
/// Implementations wrap whatever can move raw bytes onto a monitor-mode
/// interface, typically an `AF_PACKET` socket bound to the interface index.
/// The core never opens sockets itself.
pub trait PacketSender {
    /// Inject one serialized frame on the interface with the given index.
    fn send(&mut self, iface_index: u32, frame: &[u8]) -> Result<(), Error>;
}

/// Resolve an interface name to its index.
pub fn interface_index(name: &str) -> Result<u32, Error> {
    nix::net::if_::if_nametoindex(name).map_err(|_| Error::NoSuchInterface(name.to_string()))
}
