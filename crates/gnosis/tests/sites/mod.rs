//! Extraction against stored pages from each supported site.

use super::*;

#[traced_test]
#[test]
fn test_arxiv() {
  let result = extract_fixture("arxiv.org/abs/1706.03762", "arxiv.html");
  assert_eq!(result.title.as_deref(), Some("Attention Is All You Need"));
  assert_eq!(result.authors.as_deref(), Some("Ashish Vaswani, Noam Shazeer, Niki Parmar"));
  assert_eq!(
    result.abstract_text.as_deref(),
    Some(
      "The dominant sequence transduction models are based on complex recurrent or convolutional \
       neural networks. We propose a new simple network architecture, the Transformer."
    )
  );
  assert_eq!(result.download_link.as_deref(), Some("https://arxiv.org/pdf/1706.03762"));
}

#[traced_test]
#[test]
fn test_neurips() {
  let result =
    extract_fixture("https://papers.nips.cc/paper/7181-attention-is-all-you-need", "neurips.html");
  assert_eq!(result.title.as_deref(), Some("Attention is All you Need"));
  assert_eq!(result.authors.as_deref(), Some("Ashish Vaswani,Noam Shazeer,Niki Parmar"));
  assert_eq!(
    result.abstract_text.as_deref(),
    Some("The dominant sequence transduction models are based on complex recurrent networks.")
  );
  assert_eq!(
    result.download_link.as_deref(),
    Some("https://papers.nips.cc/paper/7181-attention-is-all-you-need.pdf")
  );
}

#[traced_test]
#[test]
fn test_jmlr() {
  let result = extract_fixture("https://www.jmlr.org/papers/v15/srivastava14a.html", "jmlr.html");
  assert_eq!(
    result.title.as_deref(),
    Some("Dropout: A Simple Way to Prevent Neural Networks from Overfitting")
  );
  assert_eq!(result.authors.as_deref(), Some("Nitish Srivastava, Geoffrey Hinton, Alex Krizhevsky"));
  assert_eq!(
    result.abstract_text.as_deref(),
    Some("Deep neural nets with a large number of parameters are very powerful machine learning systems.")
  );
  assert_eq!(
    result.download_link.as_deref(),
    Some("http://www.jmlr.org/papers/volume15/srivastava14a/srivastava14a.pdf")
  );
}

#[traced_test]
#[test]
fn test_jmlr_legacy_layout() {
  let result = extract_fixture("jmlr.org/papers/v1/meila00a.html", "jmlr_legacy.html");
  assert_eq!(result.title.as_deref(), Some("Learning with Mixtures of Trees"));
  assert_eq!(result.authors.as_deref(), Some("Marina Meila, Michael I. Jordan"));
  assert_eq!(result.abstract_text.as_deref(), Some("This paper describes the mixtures-of-trees model."));
  assert_eq!(
    result.download_link.as_deref(),
    Some("http://www.jmlr.org/papers/volume1/meila00a/meila00a.pdf")
  );
}

#[traced_test]
#[test]
fn test_pmlr() {
  let result = extract_fixture("http://proceedings.mlr.press/v97/kumar19a.html", "pmlr.html");
  assert_eq!(
    result.title.as_deref(),
    Some("Stabilizing Off-Policy Q-Learning via Bootstrapping Error Reduction")
  );
  assert_eq!(result.authors.as_deref(), Some("Aviral Kumar,Justin Fu,George Tucker"));
  assert_eq!(
    result.abstract_text.as_deref(),
    Some("Off-policy reinforcement learning aims to leverage experience collected from prior policies.")
  );
  assert_eq!(
    result.download_link.as_deref(),
    Some("http://proceedings.mlr.press/v97/kumar19a/kumar19a.pdf")
  );
}

#[traced_test]
#[test]
fn test_cvf() {
  let result = extract_fixture(
    "https://openaccess.thecvf.com/content_CVPR_2019/html/Sun_Deep_High-Resolution_CVPR_2019_paper.html",
    "cvf.html",
  );
  assert_eq!(
    result.title.as_deref(),
    Some("Deep High-Resolution Representation Learning for Human Pose Estimation")
  );
  assert_eq!(result.authors.as_deref(), Some("Ke Sun, Bin Xiao, Dong Liu, Jingdong Wang"));
  assert_eq!(
    result.abstract_text.as_deref(),
    Some(
      "We are interested in the human pose estimation problem with a focus on learning reliable \
       high-resolution representations."
    )
  );
  assert_eq!(
    result.download_link.as_deref(),
    Some(
      "http://openaccess.thecvf.com/content_CVPR_2019/papers/Sun_Deep_High-Resolution_CVPR_2019_paper.pdf"
    )
  );
}

#[traced_test]
#[test]
fn test_robotics() {
  let result = extract_fixture("http://www.roboticsproceedings.org/rss12/p01.html", "robotics.html");
  assert_eq!(result.title.as_deref(), Some("Planning with Uncertain Maps"));
  assert_eq!(result.authors.as_deref(), Some("Jane Roe, John Doe"));
  assert_eq!(result.abstract_text.as_deref(), Some("We plan under map uncertainty."));
  assert_eq!(
    result.download_link.as_deref(),
    Some("http://www.roboticsproceedings.org/rss12/p01.pdf")
  );
}

#[traced_test]
#[test]
fn test_ieee() {
  let result = extract_fixture("https://ieeexplore.ieee.org/document/8578843", "ieee.html");
  assert_eq!(result.title.as_deref(), Some("Squeeze-and-Excitation Networks"));
  assert_eq!(result.authors.as_deref(), Some("Jie Hu, Li Shen, Gang Sun"));
  assert_eq!(
    result.abstract_text.as_deref(),
    Some("The central building block of convolutional neural networks is the convolution operator.")
  );
  assert_eq!(
    result.download_link.as_deref(),
    Some("https://ieeexplore.ieee.org/iel7/8576498/8578098/08578843.pdf")
  );
}

#[traced_test]
#[test]
fn test_acm() {
  let result = extract_fixture("https://dl.acm.org/doi/10.1145/3292500.3330701", "acm.html");
  assert_eq!(
    result.title.as_deref(),
    Some("Optuna: A Next-generation Hyperparameter Optimization Framework")
  );
  assert_eq!(result.authors.as_deref(), Some("Takuya Akiba, Shotaro Sano, Masanori Koyama"));
  assert_eq!(
    result.abstract_text.as_deref(),
    Some(
      "The purpose of this study is to introduce new design-criteria for next-generation \
       hyperparameter optimization software."
    )
  );
  assert_eq!(
    result.download_link.as_deref(),
    Some("https://dl.acm.org/doi/pdf/10.1145/3292500.3330701")
  );
}

#[traced_test]
#[test]
fn test_acm_book_page_yields_nothing() {
  let result = extract_fixture("https://dl.acm.org/doi/book/10.1145/3335772", "acm_book.html");
  assert_eq!(result, ExtractionResult::default());
}

#[traced_test]
#[test]
fn test_wrong_site_layout_yields_no_link() {
  // An arXiv page served under a CVF URL has none of the CVF nodes
  let result = extract_fixture(
    "https://openaccess.thecvf.com/content_CVPR_2019/html/Sun_Deep_High-Resolution_CVPR_2019_paper.html",
    "arxiv.html",
  );
  assert!(!result.is_complete());
  assert!(result.download_link.is_none());
}
