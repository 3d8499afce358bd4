use std::{
  convert::TryFrom,
  fmt::{self, Display, Formatter},
  num::TryFromIntError,
};

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Default)]
pub struct Millisatoshi(u64);

impl Millisatoshi {
  pub fn new(value: u64) -> Self {
    Self(value)
  }

  pub fn value(self) -> u64 {
    self.0
  }
}

/// LND reports amounts as signed 64-bit integers.
impl TryFrom<i64> for Millisatoshi {
  type Error = TryFromIntError;

  fn try_from(value: i64) -> Result<Self, Self::Error> {
    u64::try_from(value).map(Self)
  }
}

impl TryFrom<Millisatoshi> for i64 {
  type Error = TryFromIntError;

  fn try_from(value: Millisatoshi) -> Result<Self, Self::Error> {
    i64::try_from(value.0)
  }
}

impl Display for Millisatoshi {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    use num_format::{Locale, ToFormattedString};

    write!(f, "{}", (self.0 / 1000).to_formatted_string(&Locale::en))?;

    let millisatoshis = self.0 % 1000;

    if millisatoshis > 0 {
      write!(
        f,
        ".{}",
        format!("{:03}", millisatoshis).trim_end_matches('0')
      )?;
    }

    if self.0 == 1_000 {
      write!(f, " satoshi")?;
    } else {
      write!(f, " satoshis")?;
    }

    Ok(())
  }
}
