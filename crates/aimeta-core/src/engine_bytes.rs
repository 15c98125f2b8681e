//! 字节级匹配引擎
use memchr::memmem;

use crate::catalog::{Catalog, Indicator};

/// 按目录顺序逐条做包含判定，返回命中的指示符
/// - 每条指示符只做一次 `contains` 测试，不记录位置或次数
/// - 结果顺序等于目录顺序，与文件中出现的先后无关；同一指示符至多出现一次
/// - 不提前终止：所有指示符都会被检查
/// - 纯函数，无 I/O，无共享可变状态
pub fn scan<'c>(buf: &[u8], catalog: &'c Catalog) -> Vec<&'c Indicator> {
    catalog
        .iter()
        .filter(|ind| contains(buf, ind.as_bytes()))
        .collect()
}

/// 空模式不视为命中
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && memmem::find(haystack, needle).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(items: &[&'static [u8]]) -> Catalog {
        Catalog::from_indicators(items.iter().map(|&b| Indicator::from_static(b)))
    }

    fn texts(found: &[&Indicator]) -> Vec<String> {
        found.iter().map(|i| i.display_text().into_owned()).collect()
    }

    #[test]
    fn empty_buffer_matches_nothing() {
        assert!(scan(b"", &Catalog::builtin()).is_empty());
    }

    #[test]
    fn match_is_case_sensitive() {
        let c = cat(&[b"C2PA"]);
        assert!(scan(b"hello c2pa world", &c).is_empty());
        assert_eq!(texts(&scan(b"hello C2PA world", &c)), vec!["C2PA"]);
    }

    #[test]
    fn hello_c2pa_world_reports_c2pa() {
        let catalog = Catalog::builtin();
        let found = scan(b"hello c2pa world", &catalog);
        assert_eq!(texts(&found), vec!["c2pa"]);
    }

    #[test]
    fn result_follows_catalog_order_not_file_order() {
        let c = cat(&[b"alpha", b"beta", b"gamma"]);
        let found = scan(b"gamma ... beta ... alpha ... gamma", &c);
        assert_eq!(texts(&found), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn repeated_occurrence_reported_once() {
        let c = cat(&[b"jumb"]);
        assert_eq!(scan(b"jumbjumbjumb", &c).len(), 1);
    }

    #[test]
    fn overlapping_indicators_both_reported() {
        let catalog = Catalog::builtin();
        let found = scan(b"xx dalle2 xx", &catalog);
        let t = texts(&found);
        assert!(t.contains(&"dalle".to_string()));
        assert!(t.contains(&"dalle2".to_string()));
        let pos_dalle = t.iter().position(|s| s == "dalle").unwrap();
        let pos_dalle2 = t.iter().position(|s| s == "dalle2").unwrap();
        assert!(pos_dalle < pos_dalle2);
    }

    #[test]
    fn membership_is_sound_and_complete() {
        let catalog = Catalog::builtin();
        let buf: &[u8] = b"\x89PNG\r\n\x1a\n....urn:c2pa:1234....midjourney v6\x00\xff";
        let found = scan(buf, &catalog);
        for ind in &catalog {
            let present = buf.windows(ind.as_bytes().len()).any(|w| w == ind.as_bytes());
            let reported = found.iter().any(|f| f.as_bytes() == ind.as_bytes());
            assert_eq!(present, reported, "indicator {:?}", ind.display_text());
        }
    }

    #[test]
    fn result_is_subsequence_of_catalog() {
        let catalog = Catalog::builtin();
        let found = scan(b"ai_art openai.com c2pa.manifest_store generator jumdc2pn", &catalog);
        let mut it = catalog.iter();
        for f in &found {
            assert!(it.any(|c| c == *f));
        }
    }

    #[test]
    fn scan_is_idempotent() {
        let catalog = Catalog::builtin();
        let buf = b"stable diffusion firefly adobe_firefly";
        assert_eq!(scan(buf, &catalog), scan(buf, &catalog));
    }

    #[test]
    fn raw_byte_indicator_matches_invalid_utf8() {
        let c = cat(&[b"\xff\xfecbor"]);
        let found = scan(b"\x00\x01\xff\xfecbor\x02", &c);
        assert_eq!(texts(&found), vec!["\u{FFFD}\u{FFFD}cbor"]);
    }

    #[test]
    fn empty_pattern_never_matches() {
        let c = Catalog::from_indicators(vec![Indicator::from_vec(Vec::new())]);
        assert!(scan(b"anything", &c).is_empty());
    }
}
