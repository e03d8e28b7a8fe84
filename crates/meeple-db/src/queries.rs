use rusqlite::{OptionalExtension, Row, params};
use std::fmt;
use std::str::FromStr;

use crate::Database;
use crate::error::{StoreError, StoreResult};
use crate::models::{CategoryRow, CommentRow, ReviewRow, ReviewWithCommentsRow, UserRow};

/// Columns the review listing may be sorted by. Sorting is only ever done
/// through this closed enum; user input never reaches the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Owner,
    Title,
    ReviewId,
    Category,
    ReviewImgUrl,
    CreatedAt,
    Votes,
    Designer,
    CommentCount,
}

impl SortColumn {
    fn as_sql(self) -> &'static str {
        match self {
            SortColumn::Owner => "r.owner",
            SortColumn::Title => "r.title",
            SortColumn::ReviewId => "r.review_id",
            SortColumn::Category => "r.category",
            SortColumn::ReviewImgUrl => "r.review_img_url",
            SortColumn::CreatedAt => "r.created_at",
            SortColumn::Votes => "r.votes",
            SortColumn::Designer => "r.designer",
            SortColumn::CommentCount => "comment_count",
        }
    }
}

impl FromStr for SortColumn {
    type Err = UnknownSortValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(SortColumn::Owner),
            "title" => Ok(SortColumn::Title),
            "review_id" => Ok(SortColumn::ReviewId),
            "category" => Ok(SortColumn::Category),
            "review_img_url" => Ok(SortColumn::ReviewImgUrl),
            "created_at" => Ok(SortColumn::CreatedAt),
            "votes" => Ok(SortColumn::Votes),
            "designer" => Ok(SortColumn::Designer),
            "comment_count" => Ok(SortColumn::CommentCount),
            _ => Err(UnknownSortValue),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = UnknownSortValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The original API accepted either case from clients.
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Ascending),
            "DESC" => Ok(SortOrder::Descending),
            _ => Err(UnknownSortValue),
        }
    }
}

/// A `sortBy`/`sortOrder` value outside the allow-list.
#[derive(Debug)]
pub struct UnknownSortValue;

impl fmt::Display for UnknownSortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value is not an allowed sort option")
    }
}

impl std::error::Error for UnknownSortValue {}

const REVIEW_COLUMNS: &str =
    "review_id, title, review_body, designer, review_img_url, votes, category, owner, created_at";

fn map_review_row(row: &Row<'_>) -> rusqlite::Result<ReviewRow> {
    Ok(ReviewRow {
        review_id: row.get("review_id")?,
        title: row.get("title")?,
        review_body: row.get("review_body")?,
        designer: row.get("designer")?,
        review_img_url: row.get("review_img_url")?,
        votes: row.get("votes")?,
        category: row.get("category")?,
        owner: row.get("owner")?,
        created_at: row.get("created_at")?,
    })
}

fn map_comment_row(row: &Row<'_>) -> rusqlite::Result<CommentRow> {
    Ok(CommentRow {
        comment_id: row.get("comment_id")?,
        body: row.get("body")?,
        votes: row.get("votes")?,
        author: row.get("author")?,
        review_id: row.get("review_id")?,
        created_at: row.get("created_at")?,
    })
}

impl Database {
    // -- Categories --

    pub fn list_categories(&self) -> StoreResult<Vec<CategoryRow>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT slug, description FROM categories ORDER BY slug")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(CategoryRow {
                        slug: row.get(0)?,
                        description: row.get(1)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Reviews --

    pub fn get_review(&self, review_id: i64) -> StoreResult<ReviewRow> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE review_id = ?1"),
                [review_id],
                map_review_row,
            )
            .optional()?
            .ok_or(StoreError::ReviewNotFound(review_id))
        })
    }

    /// Review listing with the derived comment count, optionally filtered
    /// by exact category match. The filter value is parameter-bound; the
    /// sort column and direction come from the closed enums above.
    pub fn list_reviews(
        &self,
        category: Option<&str>,
        sort_by: SortColumn,
        order: SortOrder,
    ) -> StoreResult<Vec<ReviewWithCommentsRow>> {
        self.with_conn(|conn| {
            let filter = if category.is_some() {
                "WHERE r.category = ?1"
            } else {
                ""
            };
            let sql = format!(
                "SELECT r.review_id, r.title, r.review_body, r.designer, r.review_img_url,
                        r.votes, r.category, r.owner, r.created_at,
                        COUNT(c.comment_id) AS comment_count
                 FROM reviews r
                 LEFT JOIN comments c ON c.review_id = r.review_id
                 {filter}
                 GROUP BY r.review_id
                 ORDER BY {} {}",
                sort_by.as_sql(),
                order.as_sql(),
            );

            let mut stmt = conn.prepare(&sql)?;
            let map = |row: &Row<'_>| {
                Ok(ReviewWithCommentsRow {
                    review: map_review_row(row)?,
                    comment_count: row.get("comment_count")?,
                })
            };
            let rows = match category {
                Some(slug) => stmt.query_map([slug], map)?.collect::<Result<Vec<_>, _>>()?,
                None => stmt.query_map([], map)?.collect::<Result<Vec<_>, _>>()?,
            };
            Ok(rows)
        })
    }

    /// Atomic conditional vote update. The guard `votes + delta >= 0` is
    /// part of the statement itself, so concurrent decrements cannot race
    /// the check. A zero-row update is disambiguated with a follow-up
    /// existence probe under the same connection lock.
    pub fn update_votes(&self, review_id: i64, delta: i64) -> StoreResult<ReviewRow> {
        self.with_conn_mut(|conn| {
            let updated = conn
                .query_row(
                    &format!(
                        "UPDATE reviews SET votes = votes + ?1
                         WHERE review_id = ?2 AND votes + ?1 >= 0
                         RETURNING {REVIEW_COLUMNS}"
                    ),
                    params![delta, review_id],
                    map_review_row,
                )
                .optional()?;

            match updated {
                Some(row) => Ok(row),
                None => {
                    let exists: Option<i64> = conn
                        .query_row(
                            "SELECT votes FROM reviews WHERE review_id = ?1",
                            [review_id],
                            |row| row.get(0),
                        )
                        .optional()?;
                    match exists {
                        Some(_) => Err(StoreError::VoteBelowZero),
                        None => Err(StoreError::VoteTargetMissing),
                    }
                }
            }
        })
    }

    // -- Comments --

    /// Comments for a review, newest first. The review's existence is
    /// checked first: a missing review is an error, while a review with no
    /// comments is an empty list.
    pub fn get_review_comments(&self, review_id: i64) -> StoreResult<Vec<CommentRow>> {
        self.with_conn(|conn| {
            review_exists(conn, review_id)?
                .then_some(())
                .ok_or(StoreError::ReviewNotFound(review_id))?;

            let mut stmt = conn.prepare(
                "SELECT comment_id, body, votes, author, review_id, created_at
                 FROM comments
                 WHERE review_id = ?1
                 ORDER BY created_at DESC",
            )?;
            let rows = stmt
                .query_map([review_id], map_comment_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Inserts a comment with zero votes and a store-assigned timestamp.
    /// SQLite's foreign-key failure does not name the violated column, so
    /// both references are probed explicitly to keep the two failures
    /// distinguishable for the caller.
    pub fn insert_comment(
        &self,
        review_id: i64,
        username: &str,
        body: &str,
    ) -> StoreResult<CommentRow> {
        self.with_conn_mut(|conn| {
            if !review_exists(conn, review_id)? {
                return Err(StoreError::UnknownReview);
            }
            let user_known: Option<i64> = conn
                .query_row(
                    "SELECT 1 FROM users WHERE username = ?1",
                    [username],
                    |row| row.get(0),
                )
                .optional()?;
            if user_known.is_none() {
                return Err(StoreError::UnknownUser);
            }

            let row = conn.query_row(
                "INSERT INTO comments (body, author, review_id) VALUES (?1, ?2, ?3)
                 RETURNING comment_id, body, votes, author, review_id, created_at",
                params![body, username, review_id],
                map_comment_row,
            )?;
            Ok(row)
        })
    }

    /// Deletes and returns the comment, so callers can tell a successful
    /// deletion from an id that never existed.
    pub fn delete_comment(&self, comment_id: i64) -> StoreResult<CommentRow> {
        self.with_conn_mut(|conn| {
            conn.query_row(
                "DELETE FROM comments WHERE comment_id = ?1
                 RETURNING comment_id, body, votes, author, review_id, created_at",
                [comment_id],
                map_comment_row,
            )
            .optional()?
            .ok_or(StoreError::CommentNotFound(comment_id))
        })
    }

    // -- Users --

    pub fn list_users(&self) -> StoreResult<Vec<UserRow>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT username, name, avatar_url FROM users ORDER BY username")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(UserRow {
                        username: row.get(0)?,
                        name: row.get(1)?,
                        avatar_url: row.get(2)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }
}

fn review_exists(conn: &rusqlite::Connection, review_id: i64) -> StoreResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM reviews WHERE review_id = ?1",
            [review_id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn sample_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| seed::load_sample_data(conn)).unwrap();
        db
    }

    #[test]
    fn get_review_returns_matching_row() {
        let db = sample_db();
        let review = db.get_review(1).unwrap();
        assert_eq!(review.review_id, 1);
        assert_eq!(review.title, "Agricola");
        assert_eq!(review.votes, 1);
    }

    #[test]
    fn get_review_absent_id_is_not_found() {
        let db = sample_db();
        assert!(matches!(
            db.get_review(5432534),
            Err(StoreError::ReviewNotFound(5432534))
        ));
    }

    #[test]
    fn list_reviews_counts_comments() {
        let db = sample_db();
        let reviews = db
            .list_reviews(None, SortColumn::ReviewId, SortOrder::Ascending)
            .unwrap();
        assert_eq!(reviews.len(), 13);

        let review_three = reviews.iter().find(|r| r.review.review_id == 3).unwrap();
        assert_eq!(review_three.comment_count, 3);
        let review_one = reviews.iter().find(|r| r.review.review_id == 1).unwrap();
        assert_eq!(review_one.comment_count, 0);
    }

    #[test]
    fn list_reviews_filters_by_category() {
        let db = sample_db();
        let reviews = db
            .list_reviews(
                Some("social deduction"),
                SortColumn::ReviewId,
                SortOrder::Ascending,
            )
            .unwrap();
        assert_eq!(reviews.len(), 11);
        assert!(reviews.iter().all(|r| r.review.category == "social deduction"));
    }

    #[test]
    fn list_reviews_unknown_category_is_empty() {
        let db = sample_db();
        let reviews = db
            .list_reviews(Some("trick-taking"), SortColumn::ReviewId, SortOrder::Ascending)
            .unwrap();
        assert!(reviews.is_empty());
    }

    #[test]
    fn list_reviews_sorts_by_votes_descending() {
        let db = sample_db();
        let reviews = db
            .list_reviews(None, SortColumn::Votes, SortOrder::Descending)
            .unwrap();
        let votes: Vec<i64> = reviews.iter().map(|r| r.review.votes).collect();
        let mut sorted = votes.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(votes, sorted);
    }

    #[test]
    fn update_votes_round_trip_is_identity() {
        let db = sample_db();
        let before = db.get_review(1).unwrap().votes;
        db.update_votes(1, 4).unwrap();
        let after = db.update_votes(1, -4).unwrap();
        assert_eq!(after.votes, before);
    }

    #[test]
    fn update_votes_rejects_negative_result_and_leaves_row_unchanged() {
        let db = sample_db();
        assert!(matches!(db.update_votes(1, -4), Err(StoreError::VoteBelowZero)));
        assert_eq!(db.get_review(1).unwrap().votes, 1);
    }

    #[test]
    fn update_votes_absent_review() {
        let db = sample_db();
        assert!(matches!(
            db.update_votes(100, 4),
            Err(StoreError::VoteTargetMissing)
        ));
    }

    #[test]
    fn insert_comment_defaults_votes_to_zero() {
        let db = sample_db();
        let comment = db.insert_comment(1, "mallionaire", "What a fun game!").unwrap();
        assert_eq!(comment.comment_id, 7);
        assert_eq!(comment.votes, 0);
        assert_eq!(comment.author, "mallionaire");
        assert_eq!(comment.review_id, 1);
    }

    #[test]
    fn insert_comment_discriminates_fk_failures() {
        let db = sample_db();
        assert!(matches!(
            db.insert_comment(200, "mallionaire", "hi"),
            Err(StoreError::UnknownReview)
        ));
        assert!(matches!(
            db.insert_comment(1, "arran", "hi"),
            Err(StoreError::UnknownUser)
        ));
    }

    #[test]
    fn review_comments_newest_first_and_empty_for_commentless_review() {
        let db = sample_db();
        let comments = db.get_review_comments(3).unwrap();
        assert_eq!(comments.len(), 3);
        assert!(comments.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        assert!(db.get_review_comments(1).unwrap().is_empty());
        assert!(matches!(
            db.get_review_comments(100),
            Err(StoreError::ReviewNotFound(100))
        ));
    }

    #[test]
    fn delete_comment_then_gone() {
        let db = sample_db();
        let deleted = db.delete_comment(3).unwrap();
        assert_eq!(deleted.comment_id, 3);
        assert!(matches!(
            db.delete_comment(3),
            Err(StoreError::CommentNotFound(3))
        ));
    }

    #[test]
    fn sort_options_parse_from_query_values() {
        assert_eq!("review_id".parse::<SortColumn>().unwrap(), SortColumn::ReviewId);
        assert_eq!(
            "comment_count".parse::<SortColumn>().unwrap(),
            SortColumn::CommentCount
        );
        assert!("votes; DROP TABLE reviews".parse::<SortColumn>().is_err());

        assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
