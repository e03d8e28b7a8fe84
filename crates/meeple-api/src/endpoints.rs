//! Self-description of the API surface served at `GET /api`. Pure data, no
//! store access.

use axum::Json;
use serde_json::{Value, json};

use meeple_types::api::EndpointsResponse;

pub async fn get_endpoints() -> Json<EndpointsResponse> {
    Json(EndpointsResponse {
        endpoints: describe(),
    })
}

pub fn describe() -> Value {
    json!({
        "GET /api": {
            "description": "returns a json representation of all available endpoints of the api"
        },
        "GET /api/categories": {
            "description": "responds with JSON containing an array of category objects with a key of 'categories'",
            "queries": [],
            "exampleResponse": {
                "categories": [{
                    "slug": "euro game",
                    "description": "Abstract games that involve little luck"
                }]
            }
        },
        "GET /api/reviews": {
            "description": "responds with JSON containing an array of reviews with key of reviews",
            "queries": ["category", "sortBy", "sortOrder"],
            "exampleResponse": {
                "reviews": [{
                    "owner": "mallionaire",
                    "title": "Agricola",
                    "review_id": 1,
                    "review_body": "Farmyard fun!",
                    "category": "euro game",
                    "review_img_url": "https://images.pexels.com/photos/974314/pexels-photo-974314.jpeg?w=700&h=700",
                    "created_at": "2021-01-18T10:00:20.514Z",
                    "votes": 1,
                    "designer": "Uwe Rosenberg",
                    "comment_count": 0
                }]
            }
        },
        "GET /api/reviews/:review_id": {
            "description": "responds with JSON containing the expected review according to the review ID",
            "queries": [],
            "exampleResponse": {
                "review": {
                    "review_id": 2,
                    "title": "Jenga",
                    "review_body": "Fiddly fun for all the family",
                    "designer": "Leslie Scott",
                    "review_img_url": "https://images.pexels.com/photos/4473494/pexels-photo-4473494.jpeg?w=700&h=700",
                    "votes": 5,
                    "category": "dexterity",
                    "owner": "philippaclaire9",
                    "created_at": "2021-01-18T10:01:41.251Z"
                }
            }
        },
        "PATCH /api/reviews/:review_id": {
            "description": "updates votes on a review by specified amount",
            "queries": [],
            "request_body": {
                "inc_votes": "number to increase or decrease votes by"
            },
            "exampleResponse": {
                "review": {
                    "review_id": 1,
                    "title": "Agricola",
                    "review_body": "Farmyard fun!",
                    "designer": "Uwe Rosenberg",
                    "review_img_url": "https://images.pexels.com/photos/974314/pexels-photo-974314.jpeg?w=700&h=700",
                    "votes": 5,
                    "category": "euro game",
                    "owner": "mallionaire",
                    "created_at": "2021-01-18T10:00:20.514Z"
                }
            }
        },
        "GET /api/reviews/:review_id/comments": {
            "description": "responds with JSON containing an array of comments associated with the given review_id",
            "queries": [],
            "exampleResponse": {
                "comments": [{
                    "comment_id": 1,
                    "votes": 16,
                    "created_at": "2017-11-22T12:43:33.389Z",
                    "author": "bainesface",
                    "body": "I loved this game too!",
                    "review_id": 2
                }]
            }
        },
        "POST /api/reviews/:review_id/comments": {
            "description": "Inserts a new comment into the comments table from a body and user given in the request",
            "queries": [],
            "request_body": {
                "username": "username the comment is associated with",
                "body": "body of the comment"
            },
            "exampleResponse": {
                "comment": {
                    "comment_id": 7,
                    "body": "What a fun game!",
                    "review_id": 1,
                    "author": "mallionaire",
                    "votes": 0,
                    "created_at": "2023-04-25T12:07:42Z"
                }
            }
        },
        "GET /api/users": {
            "description": "responds with a JSON containing an array of users",
            "queries": [],
            "exampleResponse": {
                "users": [{
                    "username": "mallionaire",
                    "name": "haz",
                    "avatar_url": "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg"
                }]
            }
        },
        "DELETE /api/comments/:comment_id": {
            "description": "deletes a specific comment according to comment_id",
            "queries": [],
            "response": "No content, 204 status code"
        }
    })
}
