// SPDX-License-Identifier: PMPL-1.0-or-later

//! English news of the dvdisaster homepage, newest first.

use super::{NewsEntry, NewsFeed};
use crate::error::ContentResult;
use crate::i18n::Lang;

pub fn dvdisaster_news() -> ContentResult<NewsFeed> {
    let mut feed = NewsFeed::new(Lang::En, "dvdisaster News");

    feed.push(NewsEntry::new(
        "05.03.2008",
        "Problem with previous Windows release fixed (0.70.6 / 0.71.25)",
        "
  Rolled back support for localized file names in version 0.70.6
  as it broke large file support under Windows. A new handler
  for localized file names will now be tested in the experimental version
  0.71.25 first.
",
    )?);

    feed.push(NewsEntry::new(
        "03.03.2008",
        "Oops - images &gt;2GB fail in 0.70.5 and 0.71.24 under Windows",
        "
   The fix for localized file names caused problems when processing
   images &gt; 2GB under Windows in the just released versions 0.70.5 and 0.71.24.
   Please stay tuned for fixed versions.
",
    )?);

    feed.push(NewsEntry::new(
        "24.02.2008",
        "dvdisaster 0.70.5 / 0.71.24 fix problems with newer Linux versions",
        "
   A problem with newer Linux kernels was fixed which would lead
   to a frozen system under some circumstances. Please upgrade on systems
   running kernels 2.6.17 and above; maybe earlier kernels are also affected.<p>

   The release of dvdisaster 0.71.24 also marks the start of
   an online documentation rewrite, including a Russian translation made
   by Igor Gorbounov.

   <i>Currently, the english documentation is far from being complete.
   Please bear with us; we'll catch up soon.</i>

",
    )?);

    feed.push(NewsEntry::new(
        "28.10.2007",
        "New documentation started",
        "
   The dvdisaster documentation is currently being reworked for the upcoming
   V0.72 release. Please be patient; the new documentation will hopefully be more
   useful than the old one, but we will need a few weeks to fill in all parts.
",
    )?);

    Ok(feed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_news_is_newest_first() {
        let feed = dvdisaster_news().unwrap();
        assert_eq!(feed.len(), 4);
        assert!(feed.is_chronological());
        assert_eq!(feed.entries()[0].date.to_string(), "05.03.2008");
        assert_eq!(feed.entries()[3].title, "New documentation started");
    }

    #[test]
    fn bodies_keep_their_markup() {
        let feed = dvdisaster_news().unwrap();
        let body = &feed.entries()[2].body;
        assert!(body.contains("<p>"));
        assert!(body.contains("<i>Currently"));
        assert!(feed.entries()[1].title.contains("&gt;2GB"));
    }
}
