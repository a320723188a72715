//! Import workflows from URL to catalog entry, served from stored pages.

use super::*;

const PAGES: [(&str, &str); 3] = [
  ("https://arxiv.org/abs/1706.03762", "arxiv.html"),
  ("http://proceedings.mlr.press/v97/kumar19a.html", "pmlr.html"),
  ("https://ieeexplore.ieee.org/document/8578843", "ieee.html"),
];

#[traced_test]
#[tokio::test]
async fn test_import_single_paper() -> TestResult<()> {
  let extractor = Extractor::with_fetcher(FixtureFetcher::new(&PAGES));
  let (db, _dir) = create_test_database().await;

  let extraction = extractor.extract("http://arxiv.org/abs/1706.03762").await?;
  assert_eq!(extraction.site(), SourceSite::Arxiv);
  assert_eq!(extraction.url(), "https://arxiv.org/abs/1706.03762");

  let draft = PaperDraft::from_extraction(extraction)?;
  assert_eq!(draft.authors, ["Ashish Vaswani", "Noam Shazeer", "Niki Parmar"]);

  let id = db.add_paper(&draft).await?;
  let stored = db.get_paper(id).await?.expect("paper was just added");
  assert_eq!(stored.title, "Attention Is All You Need");
  assert_eq!(stored.download_link, "https://arxiv.org/pdf/1706.03762");
  assert_eq!(stored.source_link, "https://arxiv.org/abs/1706.03762");
  assert_eq!(db.authors_of(id).await?.len(), 3);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_batch_import_and_search() -> TestResult<()> {
  let extractor = Extractor::with_fetcher(FixtureFetcher::new(&PAGES)).with_concurrency(2);
  let (db, _dir) = create_test_database().await;

  let urls = [
    PAGES[0].0,
    "https://example.com/not-a-paper",
    PAGES[1].0,
    "https://arxiv.org/abs/0000.00000",
    PAGES[2].0,
  ];
  let results = extractor.extract_many(&urls).await;
  assert_eq!(results.len(), urls.len());
  assert!(matches!(results[1], Err(GnosisError::UnsupportedSite(_))));
  assert!(matches!(results[3], Err(GnosisError::Fetch(_))));

  for result in results.into_iter().flatten() {
    db.add_paper(&PaperDraft::from_extraction(result)?).await?;
  }

  let titles: Vec<String> = db.papers().await?.into_iter().map(|p| p.title).collect();
  assert_eq!(titles, [
    "Attention Is All You Need",
    "Stabilizing Off-Policy Q-Learning via Bootstrapping Error Reduction",
    "Squeeze-and-Excitation Networks",
  ]);

  let hits = db.search("networks attention").await?;
  assert_eq!(hits[0].title, "Attention Is All You Need");
  assert_eq!(hits.len(), 2);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_reimport_is_rejected() -> TestResult<()> {
  let extractor = Extractor::with_fetcher(FixtureFetcher::new(&PAGES));
  let (db, _dir) = create_test_database().await;

  let draft = PaperDraft::from_extraction(extractor.extract(PAGES[1].0).await?)?;
  db.add_paper(&draft).await?;

  let again = PaperDraft::from_extraction(extractor.extract(PAGES[1].0).await?)?;
  let err = db.add_paper(&again).await.unwrap_err();
  assert!(matches!(err, GnosisError::DuplicatePaper(_)));
  assert_eq!(db.people_count().await?, 3);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_user_messages() -> TestResult<()> {
  let extractor = Extractor::with_fetcher(FixtureFetcher::new(&PAGES));

  let unsupported = extractor.extract("https://example.com/paper").await.unwrap_err();
  assert_eq!(unsupported.user_message(), "Source website is not supported");

  let unreachable = extractor.extract("https://arxiv.org/abs/0000.00000").await.unwrap_err();
  assert_eq!(unreachable.user_message(), "Invalid source, please try again.");

  let partial = Extractor::with_fetcher(FixtureFetcher::new(&[(
    "https://ieeexplore.ieee.org/document/1",
    "arxiv.html",
  )]))
  .extract("https://ieeexplore.ieee.org/document/1")
  .await?;
  let err = PaperDraft::from_extraction(partial).unwrap_err();
  assert_eq!(err.user_message(), "Invalid source, please try again.");
  Ok(())
}
