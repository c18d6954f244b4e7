//! Trimmed copies of real search pages.

pub const SEARCH_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>食べ - Jisho.org</title></head>
<body>
<div id="main_results">
  <div id="primary" class="large-8 columns">
    <div class="exact_block">
      <h4><span class="result_count"> — 3 found</span> Words</h4>

      <div class="concept_light clearfix">
        <div class="concept_light-wrapper columns zero-padding">
          <div class="concept_light-readings japanese japanese_gothic" lang="ja">
            <div class="concept_light-representation">
              <span class="furigana"><span class="kanji-1-up kanji">た</span><span></span><span></span></span>
              <span class="text">
                食<span>べ</span><span>る</span>
              </span>
            </div>
          </div>
          <div class="concept_light-status">
            <span class="concept_light-tag concept_light-common success label">Common word</span>
            <span class="concept_light-tag label"><a href="https://jisho.org/search/%23jlpt-n5">JLPT N5</a></span>
            <span class="concept_light-tag label">
              <a href="https://www.wanikani.com/vocabulary/食べる">Wanikani level 5</a>
            </span>
            <a class="concept_light-status_link" href="https://jisho.org/search/%E9%A3%9F%E3%81%B9%E3%82%8B%20%23sentences">Sentence search</a>
          </div>
        </div>
        <div class="concept_light-meanings medium-9 columns">
          <div class="meanings-wrapper">
            <div class="meaning-tags">Ichidan verb, Transitive verb</div>
            <div class="meaning-wrapper">
              <div class="meaning-definition zero-padding">
                <span class="meaning-definition-section_divider">1. </span><span class="meaning-meaning">to eat</span><span>&#8203;</span>
              </div>
            </div>
            <div class="meaning-tags">Ichidan verb, Transitive verb</div>
            <div class="meaning-wrapper">
              <div class="meaning-definition zero-padding">
                <span class="meaning-definition-section_divider">2. </span><span class="meaning-meaning">to live on (e.g. a salary); to live off; to subsist on</span><span>&#8203;</span>
              </div>
            </div>
            <div class="meaning-tags">Other forms</div>
            <div class="meaning-wrapper">
              <div class="meaning-definition zero-padding">
                <span class="meaning-meaning"><span class="break-unit">喰べる 【たべる】</span></span>
              </div>
            </div>
            <div class="meaning-tags">Notes</div>
            <div class="meaning-wrapper">
              <div class="meaning-definition zero-padding">
                <span class="meaning-meaning">喰べる: Irregular kanji usage.</span>
              </div>
            </div>
          </div>
        </div>
      </div>

      <div class="concept_light clearfix">
        <div class="concept_light-wrapper columns zero-padding">
          <div class="concept_light-readings japanese japanese_gothic" lang="ja">
            <div class="concept_light-representation">
              <span class="furigana"><span class="kanji-1-up kanji">た</span><span></span><span class="kanji-2-up kanji">もの</span></span>
              <span class="text">
                食<span>べ</span>物
              </span>
            </div>
          </div>
          <div class="concept_light-status">
            <span class="concept_light-tag concept_light-common success label">Common word</span>
          </div>
        </div>
        <div class="concept_light-meanings medium-9 columns">
          <div class="meanings-wrapper">
            <div class="meaning-tags">Noun</div>
            <div class="meaning-wrapper">
              <div class="meaning-definition zero-padding">
                <span class="meaning-definition-section_divider">1. </span><span class="meaning-meaning">food</span><span class="supplemental_info"><span class="sense-tag tag-tag">Common</span></span>
              </div>
            </div>
          </div>
        </div>
      </div>

      <div class="concept_light clearfix">
        <div class="concept_light-wrapper columns zero-padding">
          <div class="concept_light-readings japanese japanese_gothic" lang="ja">
            <div class="concept_light-representation">
              <span class="furigana"><span></span><span></span></span>
              <span class="text">
                する
              </span>
            </div>
          </div>
          <div class="concept_light-status"></div>
        </div>
      </div>
    </div>

    <div class="concepts">
      <h4>Words</h4>
      <div class="concept_light clearfix">
        <div class="concept_light-wrapper columns zero-padding">
          <div class="concept_light-readings japanese japanese_gothic" lang="ja">
            <div class="concept_light-representation">
              <span class="furigana"><span class="kanji-1-up kanji">く</span><span></span></span>
              <span class="text">
                食<span>う</span>
              </span>
            </div>
          </div>
        </div>
      </div>
      <a class="more" href="//jisho.org/search/%E9%A3%9F%E3%81%B9%20%23words?page=2">More Words &gt;</a>
    </div>
  </div>
</div>
</body>
</html>
"#;

pub const EMPTY_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>zzxq - Jisho.org</title></head>
<body>
<div id="main_results">
  <div id="no-matches">Sorry, couldn't find anything matching zzxq.</div>
</div>
</body>
</html>
"#;
