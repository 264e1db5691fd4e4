use anyhow::{bail, Context, Result};

// 半角・全角の数字列を読む
pub fn parse_number(s: &str) -> Result<usize> {
    if s.is_empty() {
        bail!("Failed to parse empty number");
    }

    let mut ret: usize = 0;
    for c in s.chars() {
        let zero = match c {
            '0'..='9' => '0',
            '０'..='９' => '０',
            _ => bail!("Failed to parse {:?}", s),
        } as usize;

        let d = (c as usize) - zero;

        ret = ret
            .checked_mul(10)
            .and_then(|r| r.checked_add(d))
            .with_context(|| format!("Number too large: {:?}", s))?;
    }
    Ok(ret)
}
