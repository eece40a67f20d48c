use shared_kernel::non_empty_string;

non_empty_string!(ContactName);
non_empty_string!(ContactEmailInner);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactEmail(ContactEmailInner);

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl TryFrom<String> for ContactEmail {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        use validator::validate_email;
        let non_empty_string = ContactEmailInner::try_from(value)?;

        let is_valid = validate_email(non_empty_string.as_ref());
        if is_valid {
            return Ok(ContactEmail(non_empty_string));
        }
        Err(format!("{} is an invalid email", non_empty_string.as_ref()))
    }
}
