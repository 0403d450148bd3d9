/// A trait to abstract over environment variable access.
///
/// The standard library is a bit spartan when it comes to environment variable
/// access. So this trait makes up for it yet still keeps things simple by only
/// requiring the implementation of one method.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Determine whether the environment variable has the given value.
    fn has_value(&self, key: &str, expected_value: &str) -> bool {
        self.read_os(key).is_some_and(|v| v == expected_value)
    }

    /// Determine whether the environment variable switches a feature off.
    ///
    /// The values `off`, `no`, `false`, and `0` do so, ignoring ASCII case
    /// and surrounding whitespace.
    fn is_switched_off(&self, key: &str) -> bool {
        self.read(key).is_ok_and(|v| {
            let v = v.trim();
            ["off", "no", "false", "0"]
                .iter()
                .any(|off| v.eq_ignore_ascii_case(off))
        })
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}


#[cfg(test)]
pub(crate) use test::FakeEnv;
