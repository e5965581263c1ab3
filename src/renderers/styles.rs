//! Stylesheet for rendered verse tables
//!
//! Installed once per document by the API layer (`ensureStylesInstalled`);
//! the element id doubles as the "already installed" marker.

/// Id of the `<style>` element holding [`STYLESHEET`]
pub const STYLE_ELEMENT_ID: &str = "shakeeb-justify-style";

/// Styles for every table class the HTML renderer emits
pub const STYLESHEET: &str = "\
.sj-block{direction:rtl;margin:0 auto;}\
.sj-table,.sj-table td{text-align:justify;text-align-last:justify;direction:rtl;line-height:1.5em;margin:0 auto;unicode-bidi:plaintext;}\
.sj-table{border-collapse:collapse;}\
.sj-table.sher2 td.sj-cell{width:45%;}\
.sj-table.sher2 td.spacer-cell,.sj-table.sher2 td.sj-blank{width:10%;}\
.sj-table.sj-gap{margin-bottom:15px;}\
.sj-table tr.spacer td{height:15px;padding:0;}\
.sj-nl{display:inline-block;width:0;height:0;overflow:hidden;white-space:pre;}\
.sj-tools{width:1.5em;text-align:center;text-align-last:center;}\
.sj-copy-btn,.sj-row-copy{cursor:pointer;border:none;background:none;opacity:.5;font-size:.8em;}\
.sj-copy-btn:hover,.sj-row-copy:hover{opacity:1;}\
.sj-empty{direction:rtl;text-align:center;opacity:.6;}\
";
