//! Fetch a collection, then rewrite one region from it. Every loader goes through the
//! [`crate::refresh::Refresher`], so only the most recently started load of a region ever writes.

use super::ViewController;
use crate::{
    api::ApiRequest,
    data::{complaint::Complaint, dashboard::DashboardCounters, room::Room, student::Student},
    document::Region,
    views::{
        complaints::complaint_rows,
        dashboard::activity_items,
        payments::payment_rows,
        rooms::room_rows,
        students::{loading_option, room_options, student_options, student_rows},
    },
};
use maud::Markup;
use serde::de::DeserializeOwned;

impl ViewController {
    ///`None` when the call failed or didn't come back as a list of `T`.
    async fn fetch_list<T: DeserializeOwned>(&self, endpoint: &str) -> Option<Vec<T>> {
        self.api_call(endpoint, ApiRequest::get())
            .await
            .records(endpoint)
    }

    async fn load_region<T: DeserializeOwned>(
        &self,
        region: Region,
        endpoint: &str,
        render: fn(&[T]) -> Markup,
    ) {
        self.refresher
            .run(region, async {
                let markup = render(&self.fetch_list::<T>(endpoint).await.unwrap_or_default());
                self.document.lock().await.set_region(region, markup);
            })
            .await;
    }

    pub async fn load_students(&self) {
        self.load_region(Region::StudentsTable, "/students", student_rows)
            .await;
    }

    pub async fn load_rooms(&self) {
        self.load_region(Region::RoomsTable, "/rooms", room_rows)
            .await;
    }

    pub async fn load_payments(&self) {
        self.load_region(Region::PaymentsTable, "/payments", payment_rows)
            .await;
    }

    pub async fn load_complaints(&self) {
        self.load_region(Region::ComplaintsTable, "/complaints", complaint_rows)
            .await;
    }

    pub async fn load_activities(&self) {
        self.load_region(Region::ActivityList, "/activities", activity_items)
            .await;
    }

    pub async fn load_rooms_for_selection(&self) {
        self.load_region(Region::StudentRoomSelect, "/rooms/available", room_options)
            .await;
    }

    ///Fills both the payment and the complaint student dropdowns from one fetch.
    pub async fn load_students_for_selection(&self) {
        self.refresher
            .run(Region::PaymentStudentSelect, async {
                {
                    let mut document = self.document.lock().await;
                    document.set_region(Region::PaymentStudentSelect, loading_option());
                    document.set_region(Region::ComplaintStudentSelect, loading_option());
                }

                let options = student_options(
                    &self
                        .fetch_list::<Student>("/students")
                        .await
                        .unwrap_or_default(),
                );

                let mut document = self.document.lock().await;
                document.set_region(Region::PaymentStudentSelect, options.clone());
                document.set_region(Region::ComplaintStudentSelect, options);
            })
            .await;
    }

    ///Dashboard counters, then the activity feed.
    ///
    ///The `/dashboard` aggregate is applied first and then overridden by counting the raw
    ///collections, so the counters only fall back to the aggregate (or, failing that, whatever
    ///was shown before) for collections that couldn't be fetched.
    pub async fn load_dashboard(&self) {
        self.refresher
            .run(Region::DashboardCounters, async {
                let (summary, students, rooms, complaints) = futures::join!(
                    self.api_call("/dashboard", ApiRequest::get()),
                    self.fetch_list::<Student>("/students"),
                    self.fetch_list::<Room>("/rooms"),
                    self.fetch_list::<Complaint>("/complaints"),
                );

                let mut document = self.document.lock().await;

                let mut counters = if summary.is_truthy() {
                    summary
                        .data()
                        .map_or_else(DashboardCounters::default, DashboardCounters::from_summary)
                } else {
                    document.counters()
                };
                if let Some(students) = students {
                    counters.recount_students(&students);
                }
                if let Some(rooms) = rooms {
                    counters.recount_rooms(&rooms);
                }
                if let Some(complaints) = complaints {
                    counters.recount_complaints(&complaints);
                }

                document.set_counters(counters);
            })
            .await;

        self.load_activities().await;
    }
}
