// クイズ文書の解析
//
// 想定する書式：
// - "Quiz Questions" を含む行より前は前書き（説明文）
// - "1. ..." から "20. ..." が設問、その後に選択肢 "A) ..." または "• ..."
// - "Answer:" / "Correct Answer:" に正解、"Rationale:" に解説
//
// 書式から外れた行はエラーにせず読み飛ばし、Anomaly として記録する

pub mod anomaly;
pub mod extractor;
pub mod line;
pub mod normalizer;
pub mod question;
