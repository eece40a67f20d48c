#[macro_export]
macro_rules! non_empty_string {
    ($TypeName: ident) => {
        #[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $TypeName(String);

        impl $TypeName {
            pub fn inner(&self) -> String {
                self.0.clone()
            }
        }

        impl PartialEq<str> for $TypeName {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl std::fmt::Display for $TypeName {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl AsRef<str> for $TypeName {
            fn as_ref(&self) -> &str {
                self.0.as_ref()
            }
        }

        impl TryFrom<String> for $TypeName {
            type Error = String;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if value.trim().is_empty() {
                    return Err(format!("{} cannot be empty", stringify!($TypeName)));
                }
                Ok($TypeName(value))
            }
        }

        impl From<$TypeName> for String {
            fn from(value: $TypeName) -> Self {
                value.0
            }
        }
    };
}

#[cfg(test)]
mod tests {
    non_empty_string!(Label);

    #[test]
    fn test_that_blank_values_are_rejected() {
        assert!(Label::try_from("   ".to_string()).is_err());
        assert!(Label::try_from("".to_string()).is_err());
    }

    #[test]
    fn test_that_value_is_kept_as_is() {
        let label = Label::try_from(" Ada ".to_string()).unwrap();
        assert_eq!(label.as_ref(), " Ada ");
        assert!(label == *" Ada ");
    }
}
