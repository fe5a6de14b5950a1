//! Static copy of the landing page.

/// A footer notice: heading, detail lines and an optional action label.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
    pub action: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub brand: &'static str,
    pub nav: &'static [&'static str],
    pub title: &'static str,
    pub tagline: &'static [&'static str],
    pub call_to_action: &'static str,
    pub invitation: Notice,
    pub recruitment: Notice,
}

impl PageContent {
    pub fn shud() -> Self {
        Self {
            brand: "Chief Tech",
            nav: &["Home", "Products", "About Us", "Contact"],
            title: "SHUD",
            tagline: &["裸眼立体 • 智能融合 • 沉浸视界", "Cutting-edge 3D HUD Technology"],
            call_to_action: "Explore SHUD",
            invitation: Notice {
                heading: "Invitation",
                lines: &["AUTO SHANGHAI 04/23 - 05/02", "展位号: 4TH - 4A11"],
                action: None,
            },
            recruitment: Notice {
                heading: "招贤纳士",
                lines: &["加入 Chief Tech, 共同创新"],
                action: Some("Join Us"),
            },
        }
    }

    pub fn window_title(&self) -> String {
        format!("{} | {}", self.title, self.brand)
    }

    /// Page text as log lines, one block per section.
    pub fn log_summary(&self) -> Vec<String> {
        let mut out = Vec::new();
        out.push(format!("{}  [{}]", self.brand, self.nav.join(" · ")));
        out.push(self.title.to_string());
        out.extend(self.tagline.iter().map(|l| format!("  {l}")));
        out.push(format!("  > {}", self.call_to_action));
        for notice in [&self.invitation, &self.recruitment] {
            out.push(notice.heading.to_string());
            out.extend(notice.lines.iter().map(|l| format!("  {l}")));
            if let Some(action) = notice.action {
                out.push(format!("  > {action}"));
            }
        }
        out
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self::shud()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_title_names_product_and_brand() {
        assert_eq!(PageContent::shud().window_title(), "SHUD | Chief Tech");
    }

    #[test]
    fn summary_covers_every_section() {
        let summary = PageContent::shud().log_summary();
        assert_eq!(summary[0], "Chief Tech  [Home · Products · About Us · Contact]");
        assert!(summary.contains(&"  > Explore SHUD".to_string()));
        assert!(summary.contains(&"  AUTO SHANGHAI 04/23 - 05/02".to_string()));
        assert!(summary.contains(&"招贤纳士".to_string()));
        assert_eq!(summary.last().map(String::as_str), Some("  > Join Us"));
    }
}
