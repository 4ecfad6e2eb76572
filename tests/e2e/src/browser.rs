use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((1280, 900)))
            .build()?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    /// Inner text of the first match, waiting for it to appear.
    pub fn text_of(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    /// Whether `selector` matches right now, without waiting.
    pub fn exists(&self, selector: &str) -> bool {
        self.tab.find_element(selector).is_ok()
    }

    pub fn count(&self, selector: &str) -> usize {
        self.tab.find_elements(selector).map(|v| v.len()).unwrap_or(0)
    }

    pub fn wait_for(&self, selector: &str, timeout: Duration) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)?;
        Ok(())
    }

    pub fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        self.tab.type_str(text)?;
        Ok(())
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    pub fn press_key(&self, key: &str) -> Result<()> {
        self.tab.press_key(key)?;
        Ok(())
    }

    pub fn url(&self) -> String {
        self.tab.get_url()
    }
}
