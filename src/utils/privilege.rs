use nix::unistd::Uid;

/// Whether the process already runs with root privileges.
pub fn is_root() -> bool {
    Uid::effective().is_root()
}
