//! Sample dataset: four categories, four users, thirteen reviews and six
//! comments. Loaded by the test suites and, optionally, at server startup
//! for local development.

use rusqlite::Connection;
use tracing::info;

use crate::error::StoreResult;

pub fn load_sample_data(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        "
        INSERT OR IGNORE INTO categories (slug, description) VALUES
            ('euro game', 'Abstract games that involve little luck'),
            ('social deduction', 'Players attempt to uncover each other''s hidden role'),
            ('dexterity', 'Games involving physical skill'),
            ('children''s games', 'Games suitable for children');

        INSERT OR IGNORE INTO users (username, name, avatar_url) VALUES
            ('mallionaire', 'haz', 'https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg'),
            ('philippaclaire9', 'philippa', 'https://avatars2.githubusercontent.com/u/24604688?s=460&v=4'),
            ('bainesface', 'sarah', 'https://avatars2.githubusercontent.com/u/24394918?s=400&v=4'),
            ('dav3rid', 'dave', 'https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png');

        INSERT OR IGNORE INTO reviews
            (review_id, title, review_body, designer, review_img_url, votes, category, owner, created_at)
        VALUES
            (1, 'Agricola', 'Farmyard fun!', 'Uwe Rosenberg',
             'https://images.pexels.com/photos/974314/pexels-photo-974314.jpeg?w=700&h=700',
             1, 'euro game', 'mallionaire', '2021-01-18T10:00:20.514Z'),
            (2, 'Jenga', 'Fiddly fun for all the family', 'Leslie Scott',
             'https://images.pexels.com/photos/4473494/pexels-photo-4473494.jpeg?w=700&h=700',
             5, 'dexterity', 'philippaclaire9', '2021-01-18T10:01:41.251Z'),
            (3, 'Ultimate Werewolf', 'We couldn''t find the werewolf!', 'Akihisa Okui',
             'https://images.pexels.com/photos/5350049/pexels-photo-5350049.jpeg?w=700&h=700',
             5, 'social deduction', 'bainesface', '2021-01-18T10:01:41.251Z'),
            (4, 'Dolor reprehenderit', 'Consequat velit occaecat voluptate do', 'Gamey McGameface',
             'https://images.pexels.com/photos/278918/pexels-photo-278918.jpeg?w=700&h=700',
             7, 'social deduction', 'mallionaire', '2021-01-22T11:35:50.936Z'),
            (5, 'Proident tempor et.', 'Labore occaecat sunt qui commodo anim', 'Seymour Buttz',
             'https://images.pexels.com/photos/163064/play-stone-network-networked-163064.jpeg?w=700&h=700',
             5, 'social deduction', 'mallionaire', '2021-01-07T09:06:08.077Z'),
            (6, 'Occaecat consequat officia in quis commodo.', 'Fugiat fugiat enim officia laborum quis', 'Ollie Tabooger',
             'https://images.pexels.com/photos/278888/pexels-photo-278888.jpeg?w=700&h=700',
             8, 'social deduction', 'mallionaire', '2020-09-13T14:19:28.077Z'),
            (7, 'Mollit elit qui incididunt veniam occaecat cupidatat', 'Consectetur incididunt aliquip sunt qui', 'Avery Wunzboogerz',
             'https://images.pexels.com/photos/776657/pexels-photo-776657.jpeg?w=700&h=700',
             9, 'social deduction', 'mallionaire', '2021-01-25T11:16:54.963Z'),
            (8, 'One Night Ultimate Werewolf', 'We couldn''t find the werewolf!', 'Akihisa Okui',
             'https://images.pexels.com/photos/5350049/pexels-photo-5350049.jpeg?w=700&h=700',
             5, 'social deduction', 'mallionaire', '2021-01-18T10:01:41.251Z'),
            (9, 'A truly Quacking Game; Quacks of Quedlinburg', 'Every turn a fun press-your-luck game', 'Wolfgang Warsch',
             'https://images.pexels.com/photos/279321/pexels-photo-279321.jpeg?w=700&h=700',
             10, 'social deduction', 'mallionaire', '2021-01-18T10:01:41.251Z'),
            (10, 'Build you own tour de Yorkshire', 'Cold rain pours on the faces of your riders', 'Asger Harding Granerud',
             'https://images.pexels.com/photos/258045/pexels-photo-258045.jpeg?w=700&h=700',
             10, 'social deduction', 'mallionaire', '2021-01-18T10:01:41.251Z'),
            (11, 'That''s just what an evil person would say!', 'If you''ve ever wanted to accuse your siblings, this is the game for you!', 'Fiona Lohoar',
             'https://images.pexels.com/photos/220057/pexels-photo-220057.jpeg?w=700&h=700',
             8, 'social deduction', 'mallionaire', '2021-01-18T10:01:41.251Z'),
            (12, 'Scythe; you''re gonna need a bigger table!', 'Spend 30 minutes just setting up all of the boards', 'Jamey Stegmaier',
             'https://images.pexels.com/photos/4200740/pexels-photo-4200740.jpeg?w=700&h=700',
             100, 'social deduction', 'mallionaire', '2021-01-22T10:37:04.839Z'),
            (13, 'Settlers of Catan: Don''t Settle For Less', 'You have stumbled across an uncharted island', 'Klaus Teuber',
             'https://images.pexels.com/photos/1153929/pexels-photo-1153929.jpeg?w=700&h=700',
             16, 'social deduction', 'mallionaire', '1970-01-10T02:08:38.400Z');

        INSERT OR IGNORE INTO comments
            (comment_id, body, votes, author, review_id, created_at)
        VALUES
            (1, 'I loved this game too!', 16, 'bainesface', 2, '2017-11-22T12:43:33.389Z'),
            (2, 'My dog loved this game too!', 13, 'mallionaire', 3, '2021-01-18T10:09:05.410Z'),
            (3, 'I didn''t know dogs could play games', 10, 'philippaclaire9', 3, '2021-01-18T10:09:48.110Z'),
            (4, 'EPIC board game!', 16, 'bainesface', 2, '2017-11-22T12:36:03.389Z'),
            (5, 'Now this is a story all about how, board games turned my life upside down', 13, 'mallionaire', 2, '2021-01-18T10:24:05.410Z'),
            (6, 'Not sure about dogs, but my cat likes to get involved with board games, the boxes are their particular favourite', 10, 'philippaclaire9', 3, '2021-01-18T10:09:05.410Z');
        ",
    )?;

    info!("Sample data loaded");
    Ok(())
}
