/// Simplified permission model for generated artifacts.
///
/// A capability model, not a Unix permission model: can the file be read,
/// modified, executed?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    readable: bool,
    writable: bool,
    executable: bool,
}

impl Permissions {
    /// Read and write permissions.
    pub const fn read_write() -> Self {
        Self {
            readable: true,
            writable: true,
            executable: false,
        }
    }

    /// Read, write and execute permissions.
    pub const fn executable() -> Self {
        Self {
            readable: true,
            writable: true,
            executable: true,
        }
    }

    pub const fn readable(&self) -> bool {
        self.readable
    }

    pub const fn writable(&self) -> bool {
        self.writable
    }

    pub const fn executable_flag(&self) -> bool {
        self.executable
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissions_defaults() {
        let p = Permissions::default();
        assert!(p.readable());
        assert!(p.writable());
        assert!(!p.executable_flag());
    }

    #[test]
    fn permissions_executable() {
        assert!(Permissions::executable().executable_flag());
    }
}
