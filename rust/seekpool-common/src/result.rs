pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    fn check_len(items: &[u32]) -> crate::Result<usize> {
        verify_arg!(items, !items.is_empty());
        Ok(items.len())
    }

    #[test]
    fn test_verify_arg() {
        assert_eq!(check_len(&[1, 2]).unwrap(), 2);
        let err = check_len(&[]).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "items");
                assert_eq!(message, "!items.is_empty()");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}
