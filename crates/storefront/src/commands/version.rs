pub fn run() -> anyhow::Result<()> {
    println!("storefront {}", env!("CARGO_PKG_VERSION"));
    println!("Content-based similar-item recommendations");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
